use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <section class="not-found-page">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
        </section>
    }
}
