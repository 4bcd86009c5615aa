//! Grapheme-safe truncation with a suffix.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, line_width, spaces};

/// Suffix appended to truncated text when none is given.
pub const DEFAULT_TRUNCATION_SUFFIX: &str = "...";

/// Truncate a single line to exactly `width` columns.
///
/// Lines that already fit are returned unchanged. Otherwise the line is cut
/// at a grapheme boundary keeping `width - width(suffix)` columns and the
/// suffix is appended. If the suffix is not narrower than `width` the line
/// is hard-cut to `width` with no suffix. A wide grapheme straddling the cut
/// is dropped and replaced by a space so the result is always exactly
/// `width` columns wide.
pub fn truncate(line: &str, width: usize, suffix: &str) -> String {
    if width == 0 {
        return String::new();
    }
    if line_width(line) <= width {
        return line.to_string();
    }

    let suffix_width = line_width(suffix);
    if suffix_width < width {
        let mut out = take_columns(line, width - suffix_width);
        out.push_str(suffix);
        out
    } else {
        take_columns(line, width)
    }
}

/// Leading graphemes filling exactly `columns` cells, space-padded.
fn take_columns(line: &str, columns: usize) -> String {
    let mut out = String::with_capacity(line.len().min(columns * 4));
    let mut used = 0;

    for grapheme in line.graphemes(true) {
        let w = grapheme_width(grapheme);
        if used + w > columns {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }

    out.push_str(&spaces(columns - used));
    out
}
