//! Text primitives: measuring, styling, joining and placing blocks of
//! terminal text.
//!
//! This module contains:
//! - [`display_width`] / [`strip_ansi`]: column measurement that ignores escapes
//! - [`truncate`] and [`wrap_words`]: fitting a line to a width
//! - [`join_horizontal`], [`join_vertical`], [`place_within`]: block composition
//! - [`styled`] and [`bordered`]: SGR styling and frames
//! - [`Color`], [`Rgb`], [`Modifiers`], [`Style`]: styling values

mod ansi;
mod block;
mod border;
mod style;
mod truncate;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub(crate) use block::vertical_gap;
pub use block::{join_horizontal, join_vertical, place_horizontal, place_vertical, place_within};
pub use border::{bordered, BorderGlyphs};
pub use style::{styled, Color, Modifiers, Rgb, Style};
pub use truncate::{truncate, DEFAULT_TRUNCATION_SUFFIX};
pub(crate) use width::spaces;
pub use width::{display_height, display_width, line_width};
pub use wrap::wrap_words;
