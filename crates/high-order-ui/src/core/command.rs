//! Imperative scroll commands.

use crate::core::direction::ScrollDirection;

/// Animation used for a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump instantly.
    #[default]
    Auto,
    /// Animate to the target.
    Smooth,
}

impl ScrollBehavior {
    /// Maps the `is_smooth` flag onto a behavior.
    #[must_use]
    pub const fn from_smooth(smooth: bool) -> Self {
        if smooth { Self::Smooth } else { Self::Auto }
    }

    /// CSSOM `behavior` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Smooth => "smooth",
        }
    }
}

/// A single `scrollTo` call targeting one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Axis the offset applies to.
    pub direction: ScrollDirection,
    /// Absolute offset in pixels.
    pub offset: f64,
    /// Animation for the move.
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    /// Builds the command for a requested position, if any.
    #[must_use]
    pub const fn for_target(
        position: Option<f64>,
        direction: ScrollDirection,
        smooth: bool,
    ) -> Option<Self> {
        match position {
            Some(offset) => Some(Self {
                direction,
                offset,
                behavior: ScrollBehavior::from_smooth(smooth),
            }),
            None => None,
        }
    }

    /// Offset for the `top` option; `None` on horizontal commands.
    #[must_use]
    pub const fn top(&self) -> Option<f64> {
        match self.direction {
            ScrollDirection::Vertical => Some(self.offset),
            ScrollDirection::Horizontal => None,
        }
    }

    /// Offset for the `left` option; `None` on vertical commands.
    #[must_use]
    pub const fn left(&self) -> Option<f64> {
        match self.direction {
            ScrollDirection::Vertical => None,
            ScrollDirection::Horizontal => Some(self.offset),
        }
    }

    /// Converts the command into `ScrollToOptions`.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn to_options(&self) -> web_sys::ScrollToOptions {
        let options = web_sys::ScrollToOptions::new();
        if let Some(top) = self.top() {
            options.set_top(top);
        }
        if let Some(left) = self.left() {
            options.set_left(left);
        }
        options.set_behavior(match self.behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        options
    }

    /// Issues the command against a mounted element.
    #[cfg(target_arch = "wasm32")]
    pub fn apply(&self, element: &web_sys::Element) {
        element.scroll_to_with_scroll_to_options(&self.to_options());
    }
}

/// Inputs that drive a container's imperative scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTarget {
    /// Requested offset; `None` leaves the scroll position alone.
    pub position: Option<f64>,
    /// Axis the offset applies to.
    pub direction: ScrollDirection,
    /// Animate the move.
    pub smooth: bool,
}

impl ScrollTarget {
    /// Command for these inputs, if a position is requested.
    #[must_use]
    pub const fn command(&self) -> Option<ScrollCommand> {
        ScrollCommand::for_target(self.position, self.direction, self.smooth)
    }
}

/// Remembers the last [`ScrollTarget`] seen after a render and issues a
/// command only when it changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollSync {
    last: Option<ScrollTarget>,
}

impl ScrollSync {
    /// Records `target` and returns the command to issue, if any.
    ///
    /// The first target after mount counts as a change.
    pub fn update(&mut self, target: ScrollTarget) -> Option<ScrollCommand> {
        if self.last == Some(target) {
            return None;
        }
        self.last = Some(target);
        target.command()
    }
}
