//! Rendered widgets.

pub mod scroll_view;
