use crate::feed::Feed;
use crate::jump::JumpRequest;
use crate::store::{DemoStore, edge_label};
use gloo::console;
use gloo_timers::callback::Timeout;
use high_order_ui::{ContainerListeners, ScrollDirection, ScrollEdge, ScrollView};
use yew::prelude::*;
use yewdux::prelude::use_store;

const PAGE_SIZE: u32 = 20;
const TOTAL_ITEMS: u32 = 200;
// Simulated fetch latency so the loading row is visible.
const LOAD_DELAY_MS: u32 = 400;

#[function_component(FeedPage)]
pub(crate) fn feed_page() -> Html {
    let feed = use_state(|| {
        let mut feed = Feed::with_page_size(PAGE_SIZE, TOTAL_ITEMS);
        feed.load_next_page();
        feed
    });
    let loading = use_state(|| false);
    let jump = use_state(JumpRequest::default);
    let pending = use_mut_ref(|| None as Option<Timeout>);
    let (store, dispatch) = use_store::<DemoStore>();

    let onscroll = {
        let jump = jump.clone();
        Callback::from(move |_: Event| {
            let mut next = *jump;
            if next.settle() {
                jump.set(next);
            }
        })
    };

    let on_edge_change = Callback::from(move |edge: Option<ScrollEdge>| {
        dispatch.reduce_mut(|store| store.record_edge(edge));
    });

    let on_footer = {
        let feed = feed.clone();
        let loading = loading.clone();
        Callback::from(move |_: Event| {
            if *loading || feed.is_exhausted() {
                return;
            }
            loading.set(true);
            let feed = feed.clone();
            let loading = loading.clone();
            *pending.borrow_mut() = Some(Timeout::new(LOAD_DELAY_MS, move || {
                let mut next = (*feed).clone();
                next.load_next_page();
                console::debug!("feed page loaded", next.pages_loaded());
                feed.set(next);
                loading.set(false);
            }));
        })
    };

    let back_to_top = {
        let jump = jump.clone();
        Callback::from(move |_: MouseEvent| jump.set(JumpRequest::to(0.0)))
    };
    let listeners = {
        let jump = jump.clone();
        ContainerListeners {
            onkeydown: Some(Callback::from(move |event: KeyboardEvent| {
                if event.key() == "Home" {
                    event.prevent_default();
                    jump.set(JumpRequest::to(0.0));
                }
            })),
            ..ContainerListeners::default()
        }
    };

    let footer_row = if *loading {
        html! { <div class="feed-item feed-status">{"Loading more entries..."}</div> }
    } else if feed.is_exhausted() {
        html! { <div class="feed-item feed-status">{"You reached the end."}</div> }
    } else {
        Html::default()
    };
    let busy = if *loading { "true" } else { "false" };

    html! {
        <section class="feed-page">
            <header class="page-header">
                <h1>{"Feed"}</h1>
                <span class="edge-indicator">
                    {edge_label(store.last_edge, ScrollDirection::Vertical)}
                </span>
                <button onclick={back_to_top}>{"Back to top"}</button>
            </header>
            <ScrollView
                class="feed-viewport"
                style={AttrValue::from("height:420px; max-width:720px; background:#fff;")}
                attrs={vec![
                    ("role", AttrValue::from("feed")),
                    ("aria-busy", AttrValue::from(busy)),
                    ("tabindex", AttrValue::from("0")),
                ]}
                listeners={listeners}
                scroll_to_position={jump.position()}
                is_smooth={store.prefs.smooth}
                onscroll={onscroll}
                on_scroll_to_footer={on_footer}
                on_edge_change={on_edge_change}
            >
                {for feed.items().iter().map(|item| html! {
                    <div class="feed-item">{item.title.clone()}</div>
                })}
                {footer_row}
            </ScrollView>
        </section>
    }
}
