//! Errors raised when free-form strings are parsed into model values.
//!
//! Rendering itself never fails; these only surface at the edges where
//! callers hand in configuration strings.

use thiserror::Error;

/// Failure to parse a model value from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a palette index, hex triplet, or ANSI color name.
    #[error("invalid color {0:?}: expected 0-255, #rgb, #rrggbb, or an ANSI color name")]
    InvalidColor(String),
    /// Unknown border style name.
    #[error("unknown border style {0:?}")]
    UnknownBorder(String),
    /// Unknown alignment name.
    #[error("unknown alignment {0:?}")]
    UnknownAlignment(String),
    /// Unknown flex direction name.
    #[error("unknown flex direction {0:?}")]
    UnknownDirection(String),
}
