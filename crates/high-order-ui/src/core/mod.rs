//! Core, DOM-free primitives behind the widgets.
pub mod attrs;
pub mod command;
pub mod direction;
pub mod geometry;
pub mod handlers;
pub mod listeners;
