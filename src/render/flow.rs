//! Flow rendering: tile items into equal-width columns, row-major.

use tracing::debug;

use super::Renderer;
use crate::text::{join_horizontal, join_vertical, place_horizontal, spaces, vertical_gap};
use crate::view::{Alignment, FlowNode, Size};

impl FlowNode {
    /// Number of columns used in `parent_width`, always within
    /// `1..=items.len()` for a non-empty flow.
    ///
    /// With no width to divide, or a zero stride, every item shares a
    /// single row.
    pub fn columns(&self, parent_width: usize) -> usize {
        let count = self.items.len();
        if count == 0 {
            return 0;
        }

        let stride = self.item_min_width.saturating_add(self.item_spacing);
        if parent_width == 0 || stride == 0 {
            return count;
        }

        (parent_width.saturating_add(self.item_spacing) / stride).clamp(1, count)
    }

    /// Width shared by every column.
    pub fn column_width(&self, parent_width: usize) -> usize {
        let columns = self.columns(parent_width);
        if columns == 0 {
            return 0;
        }
        let gaps = self.item_spacing.saturating_mul(columns - 1);
        parent_width.saturating_sub(gaps) / columns
    }
}

impl Renderer {
    pub(crate) fn render_flow(&self, node: &FlowNode, parent: Size) -> String {
        let columns = node.columns(parent.width);
        if columns == 0 {
            return String::new();
        }
        let width = node.column_width(parent.width);
        debug!(parent_width = parent.width, columns, column_width = width, "flow");

        let item_size = Size::new(width, 0);
        let separator = spaces(node.item_spacing);
        let rows: Vec<String> = node
            .items
            .chunks(columns)
            .map(|chunk| {
                let mut blocks = Vec::with_capacity(chunk.len() * 2);
                for (i, item) in chunk.iter().enumerate() {
                    if i > 0 && node.item_spacing > 0 {
                        blocks.push(separator.clone());
                    }
                    let rendered = self.render_node(item, item_size);
                    blocks.push(place_horizontal(width, Alignment::Start, &rendered));
                }
                join_horizontal(Alignment::Start, &blocks)
            })
            .collect();

        if node.row_spacing == 0 {
            return join_vertical(Alignment::Start, &rows);
        }

        let gap = vertical_gap(node.row_spacing);
        let mut spaced = Vec::with_capacity(rows.len() * 2);
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                spaced.push(gap.clone());
            }
            spaced.push(row);
        }
        join_vertical(Alignment::Start, &spaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderConfig;
    use crate::view::Node;

    fn plain() -> Renderer {
        Renderer::with_config(RenderConfig::plain())
    }

    fn items(n: usize) -> Vec<Node> {
        (0..n).map(|i| Node::from(i.to_string())).collect()
    }

    #[test]
    fn test_columns_from_min_width() {
        let flow = FlowNode::new(10, items(7)).with_spacing(2, 0);
        assert_eq!(flow.columns(34), 3);
        assert_eq!(flow.column_width(34), 10);
    }

    #[test]
    fn test_rows_are_row_major_and_last_is_short() {
        let flow = FlowNode::new(10, items(7)).with_spacing(2, 0);
        let out = plain().render_flow(&flow, Size::new(34, 0));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0           1           2         ");
        assert_eq!(lines[2], "6         ");
    }

    #[test]
    fn test_columns_never_exceed_items() {
        let flow = FlowNode::new(5, items(2));
        assert_eq!(flow.columns(100), 2);
        assert_eq!(flow.column_width(100), 50);
    }

    #[test]
    fn test_at_least_one_column() {
        let flow = FlowNode::new(50, items(3)).with_spacing(4, 0);
        assert_eq!(flow.columns(10), 1);
        assert_eq!(flow.column_width(10), 10);
    }

    #[test]
    fn test_unknown_width_is_single_row() {
        let flow = FlowNode::new(10, items(3)).with_spacing(1, 0);
        assert_eq!(flow.columns(0), 3);
        assert_eq!(plain().render_flow(&flow, Size::UNCONSTRAINED), "0 1 2");
    }

    #[test]
    fn test_zero_stride_is_single_row() {
        let flow = FlowNode::new(0, items(4));
        assert_eq!(flow.columns(20), 4);
        assert_eq!(flow.column_width(20), 5);
    }

    #[test]
    fn test_row_spacing() {
        let flow = FlowNode::new(3, items(2)).with_spacing(0, 2);
        let out = plain().render_flow(&flow, Size::new(3, 0));
        assert_eq!(out, "0  \n\n\n1  ");
    }

    #[test]
    fn test_empty_flow() {
        let flow = FlowNode::new(10, []);
        assert_eq!(flow.columns(40), 0);
        assert_eq!(plain().render_flow(&flow, Size::new(40, 0)), "");
    }
}
