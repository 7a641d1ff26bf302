//! Scroll container with edge callbacks and imperative positioning.

use crate::core::attrs::{container_classes, passthrough_attributes};
use crate::core::command::{ScrollSync, ScrollTarget};
use crate::core::direction::ScrollDirection;
use crate::core::geometry::{Geometry, ScrollEdge};
use crate::core::handlers::ScrollHandlers;
use crate::core::listeners::ContainerListeners;
use web_sys::{Element, Event};
use yew::prelude::*;

/// Props for [`ScrollView`].
#[derive(Properties, PartialEq)]
pub struct ScrollViewProps {
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes, appended after the container's own.
    #[prop_or_default]
    pub class: Classes,
    /// Inline style, typically the fixed height or width of the viewport.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Any other attributes (ARIA, `data-*`, `role`, ...), forwarded verbatim.
    #[prop_or_default]
    pub attrs: Vec<(&'static str, AttrValue)>,
    /// Caller event handlers for the container element. Scroll is not among
    /// them; use `onscroll` below.
    #[prop_or_default]
    pub listeners: ContainerListeners,
    /// Scrolled content.
    #[prop_or_default]
    pub children: Children,
    /// Called on every scroll event, before edge checks.
    #[prop_or_default]
    pub onscroll: Option<Callback<Event>>,
    /// Called when a scroll lands on the start edge.
    #[prop_or_default]
    pub on_scroll_to_header: Option<Callback<Event>>,
    /// Called when a scroll reaches or passes the end edge.
    #[prop_or_default]
    pub on_scroll_to_footer: Option<Callback<Event>>,
    /// Called after every measured scroll with the edge it sits on, or `None`
    /// between edges.
    #[prop_or_default]
    pub on_edge_change: Option<Callback<Option<ScrollEdge>>>,
    /// Absolute offset to scroll to whenever it changes.
    #[prop_or_default]
    pub scroll_to_position: Option<f64>,
    /// Animate `scroll_to_position` moves.
    #[prop_or_default]
    pub is_smooth: bool,
    /// Axis tracked for edges and driven by `scroll_to_position`.
    #[prop_or_default]
    pub scroll_direction: ScrollDirection,
}

/// Scrollable region that reports when its start or end edge is reached.
#[function_component(ScrollView)]
pub fn scroll_view(props: &ScrollViewProps) -> Html {
    let container_ref = use_node_ref();
    let sync = use_mut_ref(ScrollSync::default);

    {
        let container_ref = container_ref.clone();
        let target = ScrollTarget {
            position: props.scroll_to_position,
            direction: props.scroll_direction,
            smooth: props.is_smooth,
        };
        use_effect(move || {
            let command = sync.borrow_mut().update(target);
            if let Some(command) = command
                && let Some(element) = container_ref.cast::<Element>()
            {
                command.apply(&element);
            }
            || ()
        });
    }

    let onscroll = {
        let container_ref = container_ref.clone();
        let direction = props.scroll_direction;
        let handlers = ScrollHandlers {
            on_scroll: props.onscroll.clone(),
            on_header: props.on_scroll_to_header.clone(),
            on_footer: props.on_scroll_to_footer.clone(),
            on_edge: props.on_edge_change.clone(),
        };
        Callback::from(move |event: Event| {
            let geometry = container_ref
                .cast::<Element>()
                .map(|element| Geometry::from_element(&element));
            handlers.dispatch(event, direction, geometry.as_ref());
        })
    };

    let class = classes!(
        container_classes(props.scroll_direction, props.is_smooth),
        props.class.clone()
    );
    let listeners = props.listeners.clone();

    let mut node = html! {
        <div
            ref={container_ref}
            id={props.id.clone()}
            class={class}
            style={props.style.clone()}
            {onscroll}
            onclick={listeners.onclick}
            ondblclick={listeners.ondblclick}
            onmouseenter={listeners.onmouseenter}
            onmouseleave={listeners.onmouseleave}
            onkeydown={listeners.onkeydown}
            onkeyup={listeners.onkeyup}
            onwheel={listeners.onwheel}
            onfocus={listeners.onfocus}
            onblur={listeners.onblur}
        >
            { for props.children.iter() }
        </div>
    };
    if let Html::VTag(tag) = &mut node {
        for (key, value) in passthrough_attributes(&props.attrs) {
            tag.add_attribute(key, value);
        }
    }
    node
}
