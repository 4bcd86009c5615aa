//! Joining and placing rectangular text blocks.
//!
//! Placement only ever pads. A block larger than the requested region is
//! returned as-is; clipping is the text renderer's job.

use super::width::{display_width, line_width, spaces};
use crate::view::Alignment;

/// Split a gap into (before, after) for an alignment.
#[inline]
const fn split_gap(gap: usize, align: Alignment) -> (usize, usize) {
    match align {
        Alignment::Start => (0, gap),
        Alignment::Center => (gap / 2, gap - gap / 2),
        Alignment::End => (gap, 0),
    }
}

/// Right-pad every line of a block to the block's own width.
fn squared_lines(block: &str) -> (Vec<String>, usize) {
    let width = display_width(block);
    let lines = block
        .split('\n')
        .map(|line| format!("{line}{}", spaces(width - line_width(line))))
        .collect();
    (lines, width)
}

/// Place blocks side by side.
///
/// Each block is squared off to its own width; shorter blocks are extended
/// with blank rows according to `align` (Start = top).
pub fn join_horizontal<S: AsRef<str>>(align: Alignment, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let squared: Vec<(Vec<String>, usize)> =
        blocks.iter().map(|b| squared_lines(b.as_ref())).collect();
    let height = squared.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);

    let mut rows = vec![String::new(); height];
    for (lines, width) in &squared {
        let (above, _) = split_gap(height - lines.len(), align);
        let blank = spaces(*width);
        for (y, row) in rows.iter_mut().enumerate() {
            let line = y
                .checked_sub(above)
                .and_then(|i| lines.get(i))
                .unwrap_or(&blank);
            row.push_str(line);
        }
    }
    rows.join("\n")
}

/// Stack blocks top to bottom.
///
/// With `Start` every line keeps its own width. `Center` and `End` pad
/// lines out to the widest line so they shift as a column.
pub fn join_vertical<S: AsRef<str>>(align: Alignment, blocks: &[S]) -> String {
    let joined = blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    if align == Alignment::Start {
        return joined;
    }

    let width = display_width(&joined);
    joined
        .split('\n')
        .map(|line| {
            let (before, after) = split_gap(width - line_width(line), align);
            format!("{}{line}{}", spaces(before), spaces(after))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad a block horizontally inside `width` columns.
///
/// Lines are squared to the block's width first so the block moves as a
/// unit. A no-op when the block is already at least `width` wide and
/// square.
pub fn place_horizontal(width: usize, align: Alignment, block: &str) -> String {
    let block_width = display_width(block);
    let gap = width.saturating_sub(block_width);
    let (before, after) = split_gap(gap, align);

    block
        .split('\n')
        .map(|line| {
            let short = block_width - line_width(line);
            match align {
                Alignment::Start => format!("{line}{}", spaces(short + after)),
                Alignment::Center => {
                    format!("{}{line}{}", spaces(before), spaces(short + after))
                }
                Alignment::End => format!("{}{line}{}", spaces(before), spaces(short)),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad a block vertically to `height` rows with blank rows as wide as the
/// block.
pub fn place_vertical(height: usize, align: Alignment, block: &str) -> String {
    let block_height = block.split('\n').count();
    if height <= block_height {
        return block.to_string();
    }

    let (above, below) = split_gap(height - block_height, align);
    let blank = spaces(display_width(block));
    let mut rows = Vec::with_capacity(height);
    rows.extend(std::iter::repeat(blank.as_str()).take(above));
    rows.extend(block.split('\n'));
    rows.extend(std::iter::repeat(blank.as_str()).take(below));
    rows.join("\n")
}

/// Pad a block out to a `width` x `height` region.
pub fn place_within(
    width: usize,
    height: usize,
    h_align: Alignment,
    v_align: Alignment,
    block: &str,
) -> String {
    place_vertical(height, v_align, &place_horizontal(width, h_align, block))
}

/// A block of `height` empty rows, used as vertical spacing.
pub(crate) fn vertical_gap(height: usize) -> String {
    "\n".repeat(height.saturating_sub(1))
}
