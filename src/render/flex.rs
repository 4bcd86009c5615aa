//! Flex rendering: width distribution for rows, stacking for columns.

use tracing::debug;

use super::Renderer;
use crate::text::{join_horizontal, join_vertical, place_horizontal, place_within, spaces, vertical_gap};
use crate::view::{Alignment, FlexDirection, FlexNode, Size};

impl FlexNode {
    /// Widths assigned to each item of a row laid out in `parent_width`.
    ///
    /// 1. Spacing between items is reserved first.
    /// 2. Fixed-width items take `min(width, remaining)` in declaration
    ///    order; later ones starve to `0` when space runs out.
    /// 3. Flexible items split what is left: evenly when no item has a
    ///    positive grow weight, otherwise `floor(available * grow / total)`.
    ///    Cells lost to integer division go one each to the first flexible
    ///    items by index.
    ///
    /// Flexible widths always sum to the space left after step 2.
    pub fn row_widths(&self, parent_width: usize) -> Vec<usize> {
        let gaps = self.spacing.saturating_mul(self.items.len().saturating_sub(1));
        let mut available = parent_width.saturating_sub(gaps);
        let mut widths = vec![0; self.items.len()];
        let mut flexible = Vec::with_capacity(self.items.len());

        for (i, item) in self.items.iter().enumerate() {
            if let Some(width) = item.fixed_width() {
                let taken = width.min(available);
                widths[i] = taken;
                available -= taken;
            } else {
                flexible.push(i);
            }
        }

        if flexible.is_empty() {
            return widths;
        }

        let total_grow: u64 = flexible
            .iter()
            .map(|&i| u64::from(self.items[i].grow.unwrap_or(0)))
            .sum();

        if total_grow == 0 {
            let share = available / flexible.len();
            for &i in &flexible {
                widths[i] = share;
            }
        } else {
            for &i in &flexible {
                let grow = self.items[i].grow.unwrap_or(0);
                widths[i] = weighted_share(available, grow, total_grow);
            }
        }

        let assigned: usize = flexible.iter().map(|&i| widths[i]).sum();
        for &i in flexible.iter().take(available - assigned) {
            widths[i] += 1;
        }
        widths
    }
}

fn weighted_share(available: usize, grow: u32, total_grow: u64) -> usize {
    let share = available as u128 * u128::from(grow) / u128::from(total_grow);
    usize::try_from(share).unwrap_or(available)
}

impl Renderer {
    pub(crate) fn render_flex(&self, node: &FlexNode, parent: Size) -> String {
        if node.items.is_empty() {
            return String::new();
        }
        match node.direction {
            FlexDirection::Row => self.render_flex_row(node, parent),
            FlexDirection::Column => self.render_flex_column(node, parent),
        }
    }

    fn render_flex_row(&self, node: &FlexNode, parent: Size) -> String {
        let widths = node.row_widths(parent.width);
        debug!(parent_width = parent.width, spacing = node.spacing, ?widths, "flex row");

        let separator = spaces(node.spacing);
        let mut blocks = Vec::with_capacity(node.items.len() * 2);
        for (i, (item, width)) in node.items.iter().zip(widths).enumerate() {
            if i > 0 && node.spacing > 0 {
                blocks.push(separator.clone());
            }
            let rendered = self.render_node(&item.node, Size::new(width, parent.height));
            blocks.push(place_horizontal(width, Alignment::Start, &rendered));
        }

        join_horizontal(Alignment::Start, &blocks)
    }

    fn render_flex_column(&self, node: &FlexNode, parent: Size) -> String {
        let separator = vertical_gap(node.spacing);
        let mut blocks = Vec::with_capacity(node.items.len() * 2);
        for (i, item) in node.items.iter().enumerate() {
            if i > 0 && node.spacing > 0 {
                blocks.push(separator.clone());
            }
            let height = item.fixed_height().unwrap_or(0);
            let rendered = self.render_node(&item.node, Size::new(parent.width, height));
            blocks.push(place_within(
                parent.width,
                height,
                Alignment::Start,
                Alignment::Start,
                &rendered,
            ));
        }

        join_vertical(Alignment::Start, &blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderConfig;
    use crate::view::{BorderStyle, BoxNode, BoxStyle, FlexItem, TextNode};

    fn plain() -> Renderer {
        Renderer::with_config(RenderConfig::plain())
    }

    fn row(items: Vec<FlexItem>, spacing: usize) -> FlexNode {
        FlexNode::row(items).with_spacing(spacing)
    }

    #[test]
    fn test_fixed_then_even_split() {
        let node = row(
            vec![FlexItem::new("a").with_width(10), FlexItem::new("b"), FlexItem::new("c")],
            2,
        );
        assert_eq!(node.row_widths(40), vec![10, 13, 13]);
    }

    #[test]
    fn test_zero_width_means_flexible() {
        let node = row(
            vec![
                FlexItem::new("a").with_width(10),
                FlexItem::new("b").with_width(0),
                FlexItem::new("c").with_width(0),
            ],
            2,
        );
        assert_eq!(node.row_widths(40), vec![10, 13, 13]);
    }

    #[test]
    fn test_even_remainder_goes_to_first_items() {
        let node = row(vec![FlexItem::new("a"), FlexItem::new("b"), FlexItem::new("c")], 0);
        assert_eq!(node.row_widths(11), vec![4, 4, 3]);
        assert_eq!(node.row_widths(10), vec![4, 3, 3]);
    }

    #[test]
    fn test_grow_weights() {
        let node = row(
            vec![
                FlexItem::new("a").with_grow(1),
                FlexItem::new("b").with_grow(2),
                FlexItem::new("c").with_grow(0),
            ],
            0,
        );
        // 10*1/3 = 3, 10*2/3 = 6, 0; one leftover cell to the first item
        assert_eq!(node.row_widths(10), vec![4, 6, 0]);
    }

    #[test]
    fn test_grow_leftover_follows_flexible_order() {
        let node = row(
            vec![
                FlexItem::new("a").with_width(2),
                FlexItem::new("b").with_grow(1),
                FlexItem::new("c").with_grow(1),
                FlexItem::new("d").with_grow(1),
            ],
            0,
        );
        // 11 left: 3 each, two leftover cells to b and c
        assert_eq!(node.row_widths(13), vec![2, 4, 4, 3]);
    }

    #[test]
    fn test_fixed_widths_starve_in_order() {
        let node = row(
            vec![
                FlexItem::new("a").with_width(8),
                FlexItem::new("b").with_width(8),
                FlexItem::new("c").with_width(8),
                FlexItem::new("d"),
            ],
            1,
        );
        // 20 - 3 = 17 available: 8, 8, 1, then nothing
        assert_eq!(node.row_widths(20), vec![8, 8, 1, 0]);
    }

    #[test]
    fn test_spacing_larger_than_parent() {
        let node = row(vec![FlexItem::new("a"), FlexItem::new("b")], 50);
        assert_eq!(node.row_widths(10), vec![0, 0]);
    }

    #[test]
    fn test_row_pads_items_to_assigned_width() {
        let node = row(vec![FlexItem::new("ab"), FlexItem::new("cd")], 1);
        let out = plain().render_flex(&node, Size::new(9, 0));
        assert_eq!(out, "ab   cd  ");
    }

    #[test]
    fn test_row_top_aligns_mixed_heights() {
        let node = row(vec![FlexItem::new("a\nb\nc"), FlexItem::new("x")], 1);
        let out = plain().render_flex(&node, Size::new(5, 0));
        assert_eq!(out, "a  x \nb    \nc    ");
    }

    #[test]
    fn test_row_of_filled_boxes_fills_width() {
        let card = || BoxNode::new(BoxStyle::new().with_border(BorderStyle::Thin).filled()).with_child("x");
        let node = row(vec![FlexItem::new(card()), FlexItem::new(card())], 2);
        let out = plain().render_flex(&node, Size::new(12, 3));
        assert_eq!(out, "┌───┐  ┌───┐\n│x  │  │x  │\n└───┘  └───┘");
    }

    #[test]
    fn test_column_spacing_between_items_only() {
        let node = FlexNode::column([FlexItem::new("a"), FlexItem::new("b"), FlexItem::new("c")])
            .with_spacing(1);
        let out = plain().render_flex(&node, Size::UNCONSTRAINED);
        assert_eq!(out, "a\n\nb\n\nc");
    }

    #[test]
    fn test_column_pads_to_parent_width_and_item_height() {
        let node = FlexNode::column([FlexItem::new("a").with_height(2), FlexItem::new("b")]);
        let out = plain().render_flex(&node, Size::new(3, 0));
        assert_eq!(out, "a  \n   \nb  ");
    }

    #[test]
    fn test_column_items_wrap_at_parent_width() {
        let node = FlexNode::column([FlexItem::new(TextNode::new("abc def").wrapped())]);
        let out = plain().render_flex(&node, Size::new(4, 0));
        assert_eq!(out, "abc \ndef ");
    }

    #[test]
    fn test_empty_flex_renders_nothing() {
        assert_eq!(plain().render_flex(&FlexNode::row([]), Size::new(10, 1)), "");
    }
}
