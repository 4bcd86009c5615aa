//! Foreground color and text attributes.
//!
//! Colors follow the terminal's own model: either an xterm-256 palette
//! index or a 24-bit true color. Styling is emitted as SGR sequences by
//! `crossterm`, one styled run per line so that blocks can later be joined
//! side by side without an open attribute bleeding across a seam.

use std::str::FromStr;

use bitflags::bitflags;
use crossterm::style::{Attribute, ContentStyle, StyledContent};

use crate::error::ParseError;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A terminal foreground color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    /// xterm-256 palette index. 0-15 are the classic ANSI colors.
    Indexed(u8),
    /// 24-bit true color.
    Rgb(Rgb),
}

const ANSI_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

impl Color {
    /// Palette index shorthand.
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    /// True-color shorthand.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self::Indexed(index)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Indexed(i) => Self::AnsiValue(i),
            Color::Rgb(Rgb { r, g, b }) => Self::Rgb { r, g, b },
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Accepts `"63"`, `"#ff8800"`, `"#f80"`, or an ANSI name such as
    /// `"red"` / `"bright-blue"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidColor(s.to_string());
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).map(Self::Rgb).ok_or_else(invalid);
        }
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed.parse::<u8>().map(Self::Indexed).map_err(|_| invalid());
        }

        let name = trimmed.to_ascii_lowercase().replace('-', "_");
        ANSI_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self::Indexed)
            .ok_or_else(invalid)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(Rgb::from_u32),
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok().map(Rgb::from_u32)
        }
        _ => None,
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use cellframe::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Modifiers {
    const ATTRIBUTES: [(Self, Attribute); 5] = [
        (Self::BOLD, Attribute::Bold),
        (Self::DIM, Attribute::Dim),
        (Self::ITALIC, Attribute::Italic),
        (Self::UNDERLINE, Attribute::Underlined),
        (Self::REVERSED, Attribute::Reverse),
    ];
}

/// Foreground color plus modifiers applied to a run of text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Style {
    /// Foreground color, terminal default when `None`.
    pub fg: Option<Color>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// The empty style; renders text untouched.
    pub const fn new() -> Self {
        Self {
            fg: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the foreground color (builder pattern).
    #[must_use]
    pub const fn with_fg(mut self, fg: Option<Color>) -> Self {
        self.fg = fg;
        self
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }

    /// Toggle bold (builder pattern).
    #[must_use]
    pub const fn with_bold(self, bold: bool) -> Self {
        if bold {
            self.with_modifiers(Modifiers::BOLD)
        } else {
            self
        }
    }

    /// Whether applying this style changes nothing.
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.modifiers.is_empty()
    }

    fn content_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.map(Into::into);
        for (flag, attribute) in Modifiers::ATTRIBUTES {
            if self.modifiers.contains(flag) {
                style.attributes.set(attribute);
            }
        }
        style
    }
}

/// Apply a style to every line of a block.
///
/// Each line becomes its own SGR run terminated by a reset. Empty lines are
/// left bare.
pub fn styled(block: &str, style: Style) -> String {
    if style.is_plain() {
        return block.to_string();
    }
    let content_style = style.content_style();
    block
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                StyledContent::new(content_style, line).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
