//! Plain value types shared by every node: sizes, insets, alignment and
//! border kinds.

use std::str::FromStr;

use crate::error::ParseError;

/// A width and height measured in terminal cells.
///
/// A dimension of `0` means "not constrained by the parent": the node
/// renders at its intrinsic size on that axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Fully unconstrained.
    pub const UNCONSTRAINED: Self = Self::new(0, 0);

    /// Same height, different width.
    #[inline]
    #[must_use]
    pub const fn with_width(self, width: usize) -> Self {
        Self::new(width, self.height)
    }

    /// Same width, different height.
    #[inline]
    #[must_use]
    pub const fn with_height(self, height: usize) -> Self {
        Self::new(self.width, height)
    }

    /// Shrink by an inset on each side, clamping at zero.
    #[inline]
    #[must_use]
    pub const fn shrink(self, padding: Padding) -> Self {
        Self::new(
            self.width.saturating_sub(padding.horizontal()),
            self.height.saturating_sub(padding.vertical()),
        )
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Size({}x{})", self.width, self.height)
    }
}

/// Inset around content, in cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Padding {
    /// Rows above.
    pub top: usize,
    /// Columns to the right.
    pub right: usize,
    /// Rows below.
    pub bottom: usize,
    /// Columns to the left.
    pub left: usize,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// CSS order: top, right, bottom, left.
    #[inline]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every side.
    #[inline]
    pub const fn all(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// `vertical` rows above and below, `horizontal` columns left and right.
    #[inline]
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Left plus right.
    #[inline]
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom.
    #[inline]
    pub const fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

/// Placement along one axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Alignment {
    /// Left or top.
    #[default]
    Start,
    /// Centered; odd remainders go after the content.
    Center,
    /// Right or bottom.
    End,
}

impl FromStr for Alignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "start" | "left" | "top" => Ok(Self::Start),
            "center" | "middle" => Ok(Self::Center),
            "end" | "right" | "bottom" => Ok(Self::End),
            _ => Err(ParseError::UnknownAlignment(s.to_string())),
        }
    }
}

/// Frame drawn around a box.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum BorderStyle {
    /// No frame; consumes no cells.
    #[default]
    None,
    /// Light box-drawing lines: ┌─┐
    Thin,
    /// Heavy box-drawing lines: ┏━┓
    Thick,
    /// Light lines with rounded corners: ╭─╮
    Rounded,
    /// Double lines: ╔═╗
    Double,
}

impl BorderStyle {
    /// Cells the frame occupies on each side.
    #[inline]
    pub const fn thickness(self) -> usize {
        match self {
            Self::None => 0,
            Self::Thin | Self::Thick | Self::Rounded | Self::Double => 1,
        }
    }
}

impl FromStr for BorderStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "normal" | "thin" => Ok(Self::Thin),
            "thick" => Ok(Self::Thick),
            "rounded" => Ok(Self::Rounded),
            "double" => Ok(Self::Double),
            _ => Err(ParseError::UnknownBorder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_sums_saturate() {
        let padding = Padding::new(usize::MAX, usize::MAX, 1, 1);
        assert_eq!(padding.horizontal(), usize::MAX);
        assert_eq!(padding.vertical(), usize::MAX);
        assert_eq!(Size::new(10, 10).shrink(padding), Size::new(0, 0));
    }

    #[test]
    fn test_shrink_clamps_at_zero() {
        let size = Size::new(5, 2).shrink(Padding::symmetric(2, 4));
        assert_eq!(size, Size::new(0, 0));
        let size = Size::new(20, 10).shrink(Padding::new(1, 2, 3, 4));
        assert_eq!(size, Size::new(14, 6));
    }

    #[test]
    fn test_padding_sums() {
        let p = Padding::new(1, 2, 3, 4);
        assert_eq!(p.horizontal(), 6);
        assert_eq!(p.vertical(), 4);
        assert_eq!(Padding::all(2), Padding::symmetric(2, 2));
    }

    #[test]
    fn test_parse_alignment() {
        assert_eq!("center".parse(), Ok(Alignment::Center));
        assert_eq!("Right".parse(), Ok(Alignment::End));
        assert_eq!("".parse(), Ok(Alignment::Start));
        assert!("diagonal".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_parse_border() {
        assert_eq!("normal".parse(), Ok(BorderStyle::Thin));
        assert_eq!("thick".parse(), Ok(BorderStyle::Thick));
        assert_eq!(
            "dotted".parse::<BorderStyle>(),
            Err(ParseError::UnknownBorder("dotted".to_string()))
        );
    }

    #[test]
    fn test_border_thickness() {
        assert_eq!(BorderStyle::None.thickness(), 0);
        assert_eq!(BorderStyle::Double.thickness(), 1);
    }
}
