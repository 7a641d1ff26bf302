//! Scroll geometry snapshots and edge detection.
//!
//! A [`Geometry`] carries the six numbers the DOM exposes for a scrollable
//! element. [`Geometry::metrics`] projects them onto a single axis, so edge
//! detection never mixes vertical and horizontal values.

use crate::core::direction::ScrollDirection;

/// Raw scroll geometry of an element, read at event time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Pixels scrolled from the top edge.
    pub scroll_top: f64,
    /// Pixels scrolled from the left edge.
    pub scroll_left: f64,
    /// Total content height.
    pub scroll_height: f64,
    /// Total content width.
    pub scroll_width: f64,
    /// Visible height.
    pub client_height: f64,
    /// Visible width.
    pub client_width: f64,
}

impl Geometry {
    /// Projects the geometry onto `direction`.
    #[must_use]
    pub const fn metrics(&self, direction: ScrollDirection) -> ScrollMetrics {
        match direction {
            ScrollDirection::Vertical => ScrollMetrics {
                offset: self.scroll_top,
                viewport: self.client_height,
                content: self.scroll_height,
            },
            ScrollDirection::Horizontal => ScrollMetrics {
                offset: self.scroll_left,
                viewport: self.client_width,
                content: self.scroll_width,
            },
        }
    }

    /// Reads the live geometry of a mounted element.
    ///
    /// Offsets keep their fractional part: `Element::scroll_top` truncates to
    /// an integer, so `0.4` would otherwise read as the start edge. Extents are
    /// integers in the DOM already.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self {
            scroll_top: fractional_offset(element, "scrollTop", element.scroll_top()),
            scroll_left: fractional_offset(element, "scrollLeft", element.scroll_left()),
            scroll_height: f64::from(element.scroll_height()),
            scroll_width: f64::from(element.scroll_width()),
            client_height: f64::from(element.client_height()),
            client_width: f64::from(element.client_width()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn fractional_offset(element: &web_sys::Element, property: &str, truncated: i32) -> f64 {
    js_sys::Reflect::get(element, &wasm_bindgen::JsValue::from_str(property))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(truncated))
}

/// Single-axis view over a [`Geometry`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the start edge.
    pub offset: f64,
    /// Visible extent along the axis.
    pub viewport: f64,
    /// Total scrollable extent along the axis.
    pub content: f64,
}

/// Content boundary reached by a scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollEdge {
    /// Start edge: top, or left for horizontal containers.
    Header,
    /// End edge: bottom, or right for horizontal containers.
    Footer,
}

impl ScrollMetrics {
    /// Edge the scroll position currently sits on.
    ///
    /// The start edge wins when both coincide, which happens whenever the
    /// content fits inside the viewport.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn edge(&self) -> Option<ScrollEdge> {
        if self.offset == 0.0 {
            Some(ScrollEdge::Header)
        } else if self.offset + self.viewport >= self.content {
            Some(ScrollEdge::Footer)
        } else {
            None
        }
    }

    /// Whether the content overflows the viewport at all.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.content > self.viewport
    }
}
