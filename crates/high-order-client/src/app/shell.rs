use crate::app::preferences::persist_prefs;
use crate::routes::Route;
use crate::store::DemoStore;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Shell)]
pub(crate) fn shell(props: &ShellProps) -> Html {
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let (store, dispatch) = use_store::<DemoStore>();

    let on_toggle_smooth = Callback::from(move |_: Event| {
        dispatch.reduce_mut(|store| persist_prefs(store.toggle_smooth()));
    });

    html! {
        <div class="shell">
            <nav class="shell-nav">
                <strong>{"High Order UI"}</strong>
                {for Route::nav().into_iter().map(|route| nav_item(route, active))}
                <label class="smooth-toggle">
                    <input
                        type="checkbox"
                        checked={store.prefs.smooth}
                        onchange={on_toggle_smooth}
                    />
                    {" Smooth jumps"}
                </label>
            </nav>
            <main class="shell-main">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: Route, active: Route) -> Html {
    let classes = classes!("nav-item", (active == route).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{route.label()}</Link<Route>>
    }
}
