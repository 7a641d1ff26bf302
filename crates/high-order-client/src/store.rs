//! Demo-wide yewdux store.
//!
//! Holds the scroll preferences every page reads and the last edge any
//! demo container reported, so the shell can show it.

use high_order_ui::{ScrollDirection, ScrollEdge};
use serde::{Deserialize, Serialize};
use yewdux::store::Store;

/// User-tunable scroll settings, persisted between visits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollPrefs {
    /// Axis used by the gallery demo.
    pub direction: ScrollDirection,
    /// Animate programmatic jumps.
    pub smooth: bool,
}

/// Shared demo state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct DemoStore {
    /// Current preferences.
    pub prefs: ScrollPrefs,
    /// Last edge reported by a demo container, if any.
    pub last_edge: Option<ScrollEdge>,
}

impl DemoStore {
    /// Flips the smooth-scrolling preference and returns the new prefs.
    pub const fn toggle_smooth(&mut self) -> ScrollPrefs {
        self.prefs.smooth = !self.prefs.smooth;
        self.prefs
    }

    /// Flips the gallery axis and returns the new prefs.
    ///
    /// The recorded edge belongs to the old axis and is cleared.
    pub const fn flip_direction(&mut self) -> ScrollPrefs {
        self.prefs.direction = self.prefs.direction.flipped();
        self.last_edge = None;
        self.prefs
    }

    /// Records the latest edge report; `None` means the container left its edges.
    pub const fn record_edge(&mut self, edge: Option<ScrollEdge>) {
        self.last_edge = edge;
    }
}

/// Indicator text for an edge along `direction`.
#[must_use]
pub const fn edge_label(edge: Option<ScrollEdge>, direction: ScrollDirection) -> &'static str {
    match (edge, direction) {
        (None, _) => "in between",
        (Some(ScrollEdge::Header), ScrollDirection::Vertical) => "at top",
        (Some(ScrollEdge::Footer), ScrollDirection::Vertical) => "at bottom",
        (Some(ScrollEdge::Header), ScrollDirection::Horizontal) => "at start",
        (Some(ScrollEdge::Footer), ScrollDirection::Horizontal) => "at end",
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoStore, ScrollPrefs, edge_label};
    use high_order_ui::{ScrollDirection, ScrollEdge};

    #[test]
    fn defaults_are_vertical_and_instant() {
        let store = DemoStore::default();
        assert_eq!(
            store.prefs,
            ScrollPrefs {
                direction: ScrollDirection::Vertical,
                smooth: false,
            }
        );
        assert_eq!(store.last_edge, None);
    }

    #[test]
    fn toggles_return_updated_prefs() {
        let mut store = DemoStore::default();
        assert!(store.toggle_smooth().smooth);
        store.last_edge = Some(ScrollEdge::Footer);
        let prefs = store.flip_direction();
        assert_eq!(prefs.direction, ScrollDirection::Horizontal);
        assert!(prefs.smooth);
        assert_eq!(store.last_edge, None);
    }

    #[test]
    fn record_edge_keeps_latest_report() {
        let mut store = DemoStore::default();
        store.record_edge(Some(ScrollEdge::Header));
        let snapshot = store.clone();
        store.record_edge(Some(ScrollEdge::Header));
        assert_eq!(store, snapshot);
        store.record_edge(None);
        assert_eq!(store.last_edge, None);
    }

    #[test]
    fn prefs_serialize_with_axis_name() {
        let prefs = ScrollPrefs {
            direction: ScrollDirection::Horizontal,
            smooth: true,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"direction":"horizontal","smooth":true}"#);
    }

    #[test]
    fn labels_name_the_axis_edge() {
        assert_eq!(
            edge_label(Some(ScrollEdge::Footer), ScrollDirection::Horizontal),
            "at end"
        );
        assert_eq!(edge_label(None, ScrollDirection::Vertical), "in between");
    }
}
