//! DOM listeners a container forwards from its props to its element.

use yew::Callback;
use yew::events::{FocusEvent, KeyboardEvent, MouseEvent, WheelEvent};

/// Listener attributes carried by [`ContainerListeners`], in field order.
///
/// `onscroll` is absent: the scroll container always installs its own.
pub const LISTENER_ATTRIBUTES: [&str; 9] = [
    "onclick",
    "ondblclick",
    "onmouseenter",
    "onmouseleave",
    "onkeydown",
    "onkeyup",
    "onwheel",
    "onfocus",
    "onblur",
];

/// Caller event handlers attached verbatim to the rendered element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerListeners {
    /// `click`.
    pub onclick: Option<Callback<MouseEvent>>,
    /// `dblclick`.
    pub ondblclick: Option<Callback<MouseEvent>>,
    /// `mouseenter`.
    pub onmouseenter: Option<Callback<MouseEvent>>,
    /// `mouseleave`.
    pub onmouseleave: Option<Callback<MouseEvent>>,
    /// `keydown`; give the container a `tabindex` through `attrs` to receive it.
    pub onkeydown: Option<Callback<KeyboardEvent>>,
    /// `keyup`.
    pub onkeyup: Option<Callback<KeyboardEvent>>,
    /// `wheel`.
    pub onwheel: Option<Callback<WheelEvent>>,
    /// `focus`.
    pub onfocus: Option<Callback<FocusEvent>>,
    /// `blur`.
    pub onblur: Option<Callback<FocusEvent>>,
}
