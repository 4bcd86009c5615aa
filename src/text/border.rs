//! Padding and frame decoration.

use super::block::place_within;
use super::style::{styled, Color, Style};
use super::width::{display_height, display_width, spaces};
use crate::view::{Alignment, BorderStyle, Padding};

/// Glyphs making up one frame style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Top and bottom edges.
    pub horizontal: char,
    /// Left and right edges.
    pub vertical: char,
}

impl BorderGlyphs {
    const THIN: Self = Self::new(['┌', '┐', '└', '┘', '─', '│']);
    const THICK: Self = Self::new(['┏', '┓', '┗', '┛', '━', '┃']);
    const ROUNDED: Self = Self::new(['╭', '╮', '╰', '╯', '─', '│']);
    const DOUBLE: Self = Self::new(['╔', '╗', '╚', '╝', '═', '║']);

    const fn new([tl, tr, bl, br, h, v]: [char; 6]) -> Self {
        Self {
            top_left: tl,
            top_right: tr,
            bottom_left: bl,
            bottom_right: br,
            horizontal: h,
            vertical: v,
        }
    }

    /// Glyphs for a border style, `None` for [`BorderStyle::None`].
    pub const fn for_style(style: BorderStyle) -> Option<Self> {
        match style {
            BorderStyle::None => None,
            BorderStyle::Thin => Some(Self::THIN),
            BorderStyle::Thick => Some(Self::THICK),
            BorderStyle::Rounded => Some(Self::ROUNDED),
            BorderStyle::Double => Some(Self::DOUBLE),
        }
    }
}

/// Surround a block with padding and then a frame.
///
/// The block is squared to its widest line before padding, so the frame
/// is always rectangular. Frame glyphs are painted with `color` when given.
/// Width of the result is `width(block) + padding.horizontal() + 2 *
/// border.thickness()`, and likewise for height.
pub fn bordered(block: &str, border: BorderStyle, color: Option<Color>, padding: Padding) -> String {
    let width = display_width(block) + padding.horizontal();
    let height = display_height(block) + padding.vertical();

    let padded = {
        let indented = block
            .split('\n')
            .map(|line| format!("{}{line}", spaces(padding.left)))
            .collect::<Vec<_>>()
            .join("\n");
        let with_top = format!("{}{indented}", "\n".repeat(padding.top));
        place_within(width, height, Alignment::Start, Alignment::Start, &with_top)
    };

    let Some(glyphs) = BorderGlyphs::for_style(border) else {
        return padded;
    };

    let paint = |s: String| styled(&s, Style::new().with_fg(color));
    let edge = glyphs.horizontal.to_string().repeat(width);
    let side = paint(glyphs.vertical.to_string());

    let mut rows = Vec::with_capacity(height + 2);
    rows.push(paint(format!("{}{edge}{}", glyphs.top_left, glyphs.top_right)));
    rows.extend(padded.split('\n').map(|line| format!("{side}{line}{side}")));
    rows.push(paint(format!("{}{edge}{}", glyphs.bottom_left, glyphs.bottom_right)));
    rows.join("\n")
}
