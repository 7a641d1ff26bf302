use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <section class="home-page">
            <h1>{"High Order UI"}</h1>
            <p>{"Small presentational widgets for Yew applications."}</p>
            <ul>
                <li>
                    <Link<Route> to={Route::Feed}>{"Feed"}</Link<Route>>
                    {": a vertical ScrollView that loads another page when its footer is reached."}
                </li>
                <li>
                    <Link<Route> to={Route::Gallery}>{"Gallery"}</Link<Route>>
                    {": a tile strip moved with scroll_to_position, on either axis."}
                </li>
            </ul>
        </section>
    }
}
