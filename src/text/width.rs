//! Display-width measurement.
//!
//! A "block" is a string whose lines are separated by `\n`. Its width is the
//! widest line in terminal columns, its height the number of lines. The empty
//! string is a block of one empty line.

use unicode_width::UnicodeWidthStr;

use super::ansi::strip_ansi;

/// Terminal columns occupied by a single line, ignoring ANSI escapes.
#[inline]
pub fn line_width(line: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(line).as_ref())
}

/// Width of the widest line of a block.
pub fn display_width(block: &str) -> usize {
    block.split('\n').map(line_width).max().unwrap_or(0)
}

/// Number of lines in a block.
#[inline]
pub fn display_height(block: &str) -> usize {
    block.split('\n').count()
}

/// Columns occupied by one grapheme cluster.
#[inline]
pub(crate) fn grapheme_width(grapheme: &str) -> usize {
    UnicodeWidthStr::width(grapheme)
}

/// `n` spaces.
#[inline]
pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn test_wide_and_zero_width() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("e\u{0301}"), 1);
    }

    #[test]
    fn test_block_width_is_widest_line() {
        assert_eq!(display_width("ab\nabcd\nabc"), 4);
        assert_eq!(display_height("ab\nabcd\nabc"), 3);
    }

    #[test]
    fn test_escapes_have_no_width() {
        assert_eq!(display_width("\x1b[1mbold\x1b[0m"), 4);
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_height(""), 1);
    }
}
