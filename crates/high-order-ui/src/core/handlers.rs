//! Scroll-event dispatch to caller callbacks.

use crate::core::direction::ScrollDirection;
use crate::core::geometry::{Geometry, ScrollEdge};
use yew::Callback;

/// Optional callbacks a scroll container forwards events to.
///
/// Generic over the event type so the dispatch order can be exercised off
/// the DOM; the component instantiates it with `web_sys::Event`.
#[derive(Debug)]
pub struct ScrollHandlers<E> {
    /// Invoked on every scroll event, before edge checks.
    pub on_scroll: Option<Callback<E>>,
    /// Invoked when the start edge is reached.
    pub on_header: Option<Callback<E>>,
    /// Invoked when the end edge is reached.
    pub on_footer: Option<Callback<E>>,
    /// Invoked after every measured scroll with the edge it sits on, or `None`
    /// between edges.
    pub on_edge: Option<Callback<Option<ScrollEdge>>>,
}

impl<E> Default for ScrollHandlers<E> {
    fn default() -> Self {
        Self {
            on_scroll: None,
            on_header: None,
            on_footer: None,
            on_edge: None,
        }
    }
}

impl<E> Clone for ScrollHandlers<E> {
    fn clone(&self) -> Self {
        Self {
            on_scroll: self.on_scroll.clone(),
            on_header: self.on_header.clone(),
            on_footer: self.on_footer.clone(),
            on_edge: self.on_edge.clone(),
        }
    }
}

impl<E> PartialEq for ScrollHandlers<E> {
    fn eq(&self, other: &Self) -> bool {
        self.on_scroll == other.on_scroll
            && self.on_header == other.on_header
            && self.on_footer == other.on_footer
            && self.on_edge == other.on_edge
    }
}

impl<E: Clone> ScrollHandlers<E> {
    /// Routes one scroll event.
    ///
    /// `geometry` is `None` while the element is not mounted; the generic
    /// callback still runs but edge detection and reporting are skipped.
    pub fn dispatch(&self, event: E, direction: ScrollDirection, geometry: Option<&Geometry>) {
        if let Some(on_scroll) = &self.on_scroll {
            on_scroll.emit(event.clone());
        }

        let Some(geometry) = geometry else {
            return;
        };
        let edge = geometry.metrics(direction).edge();
        let target = match edge {
            Some(ScrollEdge::Header) => &self.on_header,
            Some(ScrollEdge::Footer) => &self.on_footer,
            None => &None,
        };
        if let Some(callback) = target {
            callback.emit(event);
        }
        if let Some(on_edge) = &self.on_edge {
            on_edge.emit(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollHandlers;
    use crate::core::direction::ScrollDirection;
    use crate::core::geometry::{Geometry, ScrollEdge};
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Callback;

    #[derive(Default)]
    struct Calls {
        scroll: Vec<u32>,
        header: Vec<u32>,
        footer: Vec<u32>,
        edges: Vec<Option<ScrollEdge>>,
    }

    fn recording() -> (ScrollHandlers<u32>, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let scroll = Rc::clone(&calls);
        let header = Rc::clone(&calls);
        let footer = Rc::clone(&calls);
        let edges = Rc::clone(&calls);
        let handlers = ScrollHandlers {
            on_scroll: Some(Callback::from(move |id| scroll.borrow_mut().scroll.push(id))),
            on_header: Some(Callback::from(move |id| header.borrow_mut().header.push(id))),
            on_footer: Some(Callback::from(move |id| footer.borrow_mut().footer.push(id))),
            on_edge: Some(Callback::from(move |edge| edges.borrow_mut().edges.push(edge))),
        };
        (handlers, calls)
    }

    fn column(scroll_top: f64) -> Geometry {
        Geometry {
            scroll_top,
            scroll_height: 1000.0,
            client_height: 200.0,
            ..Geometry::default()
        }
    }

    #[test]
    fn vertical_scroll_sequence_fires_matching_callbacks() {
        let (handlers, calls) = recording();
        let vertical = ScrollDirection::Vertical;

        handlers.dispatch(1, vertical, Some(&column(0.0)));
        handlers.dispatch(2, vertical, Some(&column(800.0)));
        handlers.dispatch(3, vertical, Some(&column(400.0)));

        let calls = calls.borrow();
        assert_eq!(calls.scroll, vec![1, 2, 3]);
        assert_eq!(calls.header, vec![1]);
        assert_eq!(calls.footer, vec![2]);
        assert_eq!(
            calls.edges,
            vec![Some(ScrollEdge::Header), Some(ScrollEdge::Footer), None]
        );
    }

    #[test]
    fn unmounted_container_only_forwards_generic_scroll() {
        let (handlers, calls) = recording();
        handlers.dispatch(7, ScrollDirection::Vertical, None);

        let calls = calls.borrow();
        assert_eq!(calls.scroll, vec![7]);
        assert!(calls.header.is_empty());
        assert!(calls.footer.is_empty());
        assert!(calls.edges.is_empty());
    }

    #[test]
    fn coinciding_edges_report_header_even_without_header_callback() {
        let (mut handlers, calls) = recording();
        handlers.on_header = None;
        let geometry = Geometry {
            scroll_width: 500.0,
            client_width: 500.0,
            ..Geometry::default()
        };

        handlers.dispatch(4, ScrollDirection::Horizontal, Some(&geometry));
        let calls = calls.borrow();
        assert!(calls.footer.is_empty());
        assert_eq!(calls.edges, vec![Some(ScrollEdge::Header)]);
    }

    #[test]
    fn horizontal_axis_reads_horizontal_fields() {
        let (handlers, calls) = recording();
        let geometry = Geometry {
            scroll_top: 0.0,
            scroll_left: 300.0,
            scroll_width: 500.0,
            client_width: 200.0,
            scroll_height: 900.0,
            client_height: 100.0,
        };

        handlers.dispatch(5, ScrollDirection::Horizontal, Some(&geometry));
        let calls = calls.borrow();
        assert!(calls.header.is_empty());
        assert_eq!(calls.footer, vec![5]);
        assert_eq!(calls.edges, vec![Some(ScrollEdge::Footer)]);
    }

    #[test]
    fn missing_callbacks_are_skipped() {
        let handlers = ScrollHandlers::<u32>::default();
        handlers.dispatch(1, ScrollDirection::Vertical, Some(&column(800.0)));
        handlers.dispatch(2, ScrollDirection::Vertical, None);
    }
}
