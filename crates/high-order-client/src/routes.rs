//! Routing definitions for the demo client.
use yew_router::prelude::*;

/// Pages served by the demo.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing page with links to each demo.
    #[at("/")]
    Home,
    /// Vertical list that loads more rows at its footer.
    #[at("/feed")]
    Feed,
    /// Tile strip driven by jump buttons.
    #[at("/gallery")]
    Gallery,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes shown in the navigation bar, in display order.
    #[must_use]
    pub const fn nav() -> [Self; 3] {
        [Self::Home, Self::Feed, Self::Gallery]
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Feed => "Feed",
            Self::Gallery => "Gallery",
            Self::NotFound => "Not found",
        }
    }
}
