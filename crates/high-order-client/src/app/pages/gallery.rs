use crate::app::preferences::persist_prefs;
use crate::gallery::{GalleryLayout, viewport_style};
use crate::jump::JumpRequest;
use crate::store::{DemoStore, edge_label};
use high_order_ui::{ScrollEdge, ScrollView};
use yew::prelude::*;
use yewdux::prelude::use_store;

const LAYOUT: GalleryLayout = GalleryLayout::new(12, 240.0, 16.0);

#[function_component(GalleryPage)]
pub(crate) fn gallery_page() -> Html {
    let (store, dispatch) = use_store::<DemoStore>();
    let target = use_state(JumpRequest::default);
    let direction = store.prefs.direction;

    let jump_to = |index: u32| {
        let target = target.clone();
        Callback::from(move |_: MouseEvent| target.set(JumpRequest::to(LAYOUT.offset_of(index))))
    };

    let onscroll = {
        let target = target.clone();
        Callback::from(move |_: Event| {
            let mut next = *target;
            if next.settle() {
                target.set(next);
            }
        })
    };
    let on_edge_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |edge: Option<ScrollEdge>| {
            dispatch.reduce_mut(|store| store.record_edge(edge));
        })
    };

    let flip_direction = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|store| persist_prefs(store.flip_direction()));
    });

    let last = LAYOUT.tile_count().saturating_sub(1);
    let tile_style = LAYOUT.tile_style(direction);

    html! {
        <section class="gallery-page">
            <header class="page-header">
                <h1>{"Gallery"}</h1>
                <span class="edge-indicator">{edge_label(store.last_edge, direction)}</span>
                <button onclick={flip_direction}>
                    {format!("Switch to {}", direction.flipped())}
                </button>
            </header>
            <div class="gallery-controls">
                <button onclick={jump_to(0)}>{"First"}</button>
                <button onclick={jump_to(last / 2)}>{"Middle"}</button>
                <button onclick={jump_to(last)}>{"Last"}</button>
            </div>
            <ScrollView
                class="gallery-viewport"
                style={AttrValue::from(viewport_style(direction))}
                attrs={vec![("aria-label", AttrValue::from("Tile gallery"))]}
                scroll_direction={direction}
                scroll_to_position={target.position()}
                is_smooth={store.prefs.smooth}
                onscroll={onscroll}
                on_edge_change={on_edge_change}
            >
                <div class="gallery-track" style={LAYOUT.track_style(direction)}>
                    {for (0..LAYOUT.tile_count()).map(|index| html! {
                        <div class="gallery-tile" style={tile_style.clone()}>
                            {(index + 1).to_string()}
                        </div>
                    })}
                </div>
            </ScrollView>
        </section>
    }
}
