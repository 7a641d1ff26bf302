#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! High Order UI: presentational Yew building blocks.
//! The DOM-free scroll arithmetic lives in [`core`]; the rendered widgets live in
//! `components` and are only built for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod components;

pub use crate::core::command::{ScrollBehavior, ScrollCommand, ScrollSync, ScrollTarget};
pub use crate::core::direction::{ParseScrollDirectionError, ScrollDirection};
pub use crate::core::geometry::{Geometry, ScrollEdge, ScrollMetrics};
pub use crate::core::handlers::ScrollHandlers;
pub use crate::core::listeners::ContainerListeners;

#[cfg(target_arch = "wasm32")]
pub use components::scroll_view::{ScrollView, ScrollViewProps};

#[cfg(test)]
mod tests {
    use crate::{Geometry, ScrollCommand, ScrollDirection, ScrollEdge};

    #[test]
    fn root_reexports_cover_a_scroll_round() {
        let geometry = Geometry {
            scroll_top: 0.0,
            scroll_height: 1000.0,
            client_height: 200.0,
            ..Geometry::default()
        };
        assert_eq!(
            geometry.metrics(ScrollDirection::default()).edge(),
            Some(ScrollEdge::Header)
        );
        assert!(ScrollCommand::for_target(None, ScrollDirection::Vertical, false).is_none());
    }
}
