use crate::routes::Route;
use crate::store::DemoStore;
use gloo::console;
use pages::{FeedPage, GalleryPage, HomePage, NotFoundPage};
use shell::Shell;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

mod pages;
mod preferences;
mod shell;

#[function_component(DemoApp)]
pub(crate) fn demo_app() -> Html {
    html! {
        <BrowserRouter>
            <Shell>
                <Switch<Route> render={switch} />
            </Shell>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Feed => html! { <FeedPage /> },
        Route::Gallery => html! { <GalleryPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let prefs = preferences::load_prefs();
    Dispatch::<DemoStore>::new().reduce_mut(|store| store.prefs = prefs);
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DemoApp>::with_root(root).render();
    } else {
        console::error!("mount point #root not found; nothing rendered");
    }
}
