//! Fixed-size tile strip used by the gallery demo.

use high_order_ui::ScrollDirection;

/// Evenly spaced tiles along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryLayout {
    tiles: u32,
    tile_extent: f64,
    gap: f64,
}

impl GalleryLayout {
    /// Layout of `tiles` tiles, each `tile_extent` px long, `gap` px apart.
    #[must_use]
    pub const fn new(tiles: u32, tile_extent: f64, gap: f64) -> Self {
        Self {
            tiles,
            tile_extent,
            gap,
        }
    }

    /// Number of tiles.
    #[must_use]
    pub const fn tile_count(&self) -> u32 {
        self.tiles
    }

    /// Scroll offset that puts tile `index` at the start edge.
    /// Indexes past the end clamp to the last tile.
    #[must_use]
    pub fn offset_of(&self, index: u32) -> f64 {
        let index = index.min(self.tiles.saturating_sub(1));
        f64::from(index) * (self.tile_extent + self.gap)
    }

    /// Total length of the strip.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        if self.tiles == 0 {
            return 0.0;
        }
        f64::from(self.tiles) * self.tile_extent + f64::from(self.tiles - 1) * self.gap
    }

    /// Inline style sizing one tile along `direction`.
    #[must_use]
    pub fn tile_style(&self, direction: ScrollDirection) -> String {
        match direction {
            ScrollDirection::Horizontal => format!("width:{}px;", self.tile_extent),
            ScrollDirection::Vertical => format!("height:{}px;", self.tile_extent),
        }
    }

    /// Inline style for the track holding the tiles.
    #[must_use]
    pub fn track_style(&self, direction: ScrollDirection) -> String {
        let flow = match direction {
            ScrollDirection::Horizontal => "row",
            ScrollDirection::Vertical => "column",
        };
        format!("flex-direction:{flow}; gap:{}px;", self.gap)
    }
}

/// Inline style bounding the gallery viewport so it can overflow on `direction`.
#[must_use]
pub const fn viewport_style(direction: ScrollDirection) -> &'static str {
    match direction {
        ScrollDirection::Horizontal => "width:100%; max-width:720px;",
        ScrollDirection::Vertical => "height:360px; max-width:720px;",
    }
}
