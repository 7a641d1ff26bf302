//! Class and attribute composition for container widgets.

use crate::core::direction::ScrollDirection;
use crate::core::listeners::LISTENER_ATTRIBUTES;
use yew::AttrValue;

/// Attribute keys the scroll container always sets itself.
pub const OWNED_ATTRIBUTES: [&str; 2] = ["class", "onscroll"];

/// Base classes of a scroll container, before caller classes.
#[must_use]
pub fn container_classes(direction: ScrollDirection, smooth: bool) -> Vec<&'static str> {
    let mut classes = Vec::with_capacity(2);
    if smooth {
        classes.push("scroll-smooth");
    }
    classes.push(direction.overflow_class());
    classes
}

/// Caller attributes to forward verbatim.
///
/// Keys in [`OWNED_ATTRIBUTES`] are dropped, and so are listener names from
/// [`LISTENER_ATTRIBUTES`]: handlers travel as typed callbacks, never as strings.
#[must_use]
pub fn passthrough_attributes(
    attrs: &[(&'static str, AttrValue)],
) -> Vec<(&'static str, AttrValue)> {
    attrs
        .iter()
        .filter(|(key, _)| {
            !OWNED_ATTRIBUTES
                .iter()
                .chain(LISTENER_ATTRIBUTES.iter())
                .any(|owned| owned.eq_ignore_ascii_case(key))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{container_classes, passthrough_attributes};
    use crate::core::direction::ScrollDirection;
    use yew::AttrValue;

    #[test]
    fn smooth_class_precedes_axis_class() {
        assert_eq!(
            container_classes(ScrollDirection::Vertical, true),
            vec!["scroll-smooth", "overflow-y-scroll"]
        );
        assert_eq!(
            container_classes(ScrollDirection::Horizontal, false),
            vec!["overflow-x-scroll"]
        );
    }

    #[test]
    fn forwards_unknown_attributes_in_order() {
        let attrs = vec![
            ("aria-label", AttrValue::from("Messages")),
            ("CLASS", AttrValue::from("ignored")),
            ("data-testid", AttrValue::from("feed")),
            ("onscroll", AttrValue::from("alert(1)")),
            ("OnClick", AttrValue::from("alert(2)")),
            ("tabindex", AttrValue::from("0")),
        ];
        assert_eq!(
            passthrough_attributes(&attrs),
            vec![
                ("aria-label", AttrValue::from("Messages")),
                ("data-testid", AttrValue::from("feed")),
                ("tabindex", AttrValue::from("0")),
            ]
        );
    }
}
