//! Programmatic jump requests fed to a scroll container.
//!
//! A container only scrolls when its requested position changes, so a page
//! that asks for the same offset twice must clear the request in between.
//! Pages clear it on the next scroll event the container reports.

/// Offset a page has asked its container to scroll to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JumpRequest {
    target: Option<f64>,
}

impl JumpRequest {
    /// Request for `offset`.
    #[must_use]
    pub const fn to(offset: f64) -> Self {
        Self {
            target: Some(offset),
        }
    }

    /// Position to pass as `scroll_to_position`.
    #[must_use]
    pub const fn position(self) -> Option<f64> {
        self.target
    }

    /// Drops an outstanding request; returns whether one was pending.
    pub const fn settle(&mut self) -> bool {
        let pending = self.target.is_some();
        self.target = None;
        pending
    }
}
