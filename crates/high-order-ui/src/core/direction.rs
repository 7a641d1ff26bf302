//! Scroll axis selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Axis a scroll container tracks and drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Top-to-bottom scrolling (`scrollTop`/`scrollHeight`/`clientHeight`).
    #[default]
    Vertical,
    /// Left-to-right scrolling (`scrollLeft`/`scrollWidth`/`clientWidth`).
    Horizontal,
}

impl ScrollDirection {
    /// Both axes, vertical first.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Vertical, Self::Horizontal]
    }

    /// Attribute-style name of the axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    /// Utility class that enables overflow scrolling on this axis.
    #[must_use]
    pub const fn overflow_class(self) -> &'static str {
        match self {
            Self::Vertical => "overflow-y-scroll",
            Self::Horizontal => "overflow-x-scroll",
        }
    }

    /// The other axis.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names neither axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scroll direction '{input}' (expected 'vertical' or 'horizontal')")]
pub struct ParseScrollDirectionError {
    /// The rejected input, as given.
    pub input: String,
}

impl FromStr for ScrollDirection {
    type Err = ParseScrollDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::all()
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseScrollDirectionError {
                input: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseScrollDirectionError, ScrollDirection};

    #[test]
    fn default_axis_is_vertical() {
        assert_eq!(ScrollDirection::default(), ScrollDirection::Vertical);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            " Horizontal ".parse::<ScrollDirection>(),
            Ok(ScrollDirection::Horizontal)
        );
        assert_eq!(
            "VERTICAL".parse::<ScrollDirection>(),
            Ok(ScrollDirection::Vertical)
        );
    }

    #[test]
    fn rejects_unknown_names_with_input() {
        let err = "diagonal".parse::<ScrollDirection>().unwrap_err();
        assert_eq!(
            err,
            ParseScrollDirectionError {
                input: "diagonal".to_string()
            }
        );
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ScrollDirection::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
        let parsed: ScrollDirection = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, ScrollDirection::Vertical);
    }

    #[test]
    fn overflow_class_follows_axis() {
        assert_eq!(
            ScrollDirection::Vertical.overflow_class(),
            "overflow-y-scroll"
        );
        assert_eq!(
            ScrollDirection::Horizontal.overflow_class(),
            "overflow-x-scroll"
        );
        assert_eq!(
            ScrollDirection::Vertical.flipped(),
            ScrollDirection::Horizontal
        );
    }
}
