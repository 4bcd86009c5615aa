//! Composite builders that expand into plain nodes.
//!
//! None of these own render logic: each converts into a [`Node`] made of
//! boxes, flex containers and text.

use super::geometry::{Alignment, BorderStyle, Padding, Size};
use super::node::{BoxNode, BoxStyle, FlexItem, FlexNode, Node, TextNode, View};
use crate::text::Color;

/// Bullet used by [`ListView`] when none is set.
pub const DEFAULT_BULLET: &str = "- ";

/// A titled, bulleted list.
///
/// Expands to a column: a bold title line (omitted when empty) followed by
/// one wrapping text node per item, with continuation lines hanging under
/// the bullet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    /// Heading above the items.
    pub title: String,
    /// Heading color.
    pub title_color: Option<Color>,
    /// Item color.
    pub item_color: Option<Color>,
    /// Bullet before each item; [`DEFAULT_BULLET`] when `None`.
    pub bullet: Option<String>,
    /// Item texts.
    pub items: Vec<String>,
}

impl ListView {
    /// A list with a title and items.
    pub fn new<S: Into<String>>(title: impl Into<String>, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the title color (builder pattern).
    #[must_use]
    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    /// Set the item color (builder pattern).
    #[must_use]
    pub fn with_item_color(mut self, color: Color) -> Self {
        self.item_color = Some(color);
        self
    }

    /// Set the bullet (builder pattern).
    #[must_use]
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = Some(bullet.into());
        self
    }

    /// Expand into a column of text nodes.
    pub fn into_node(self) -> Node {
        let bullet = self.bullet.unwrap_or_else(|| DEFAULT_BULLET.to_string());
        let mut items = Vec::with_capacity(self.items.len() + 1);

        if !self.title.is_empty() {
            let title = TextNode {
                color: self.title_color,
                ..TextNode::new(self.title).with_bold(true)
            };
            items.push(FlexItem::new(title));
        }

        items.extend(self.items.into_iter().map(|item| {
            let text = TextNode {
                color: self.item_color,
                ..TextNode::new(item).wrapped().with_prefix(bullet.clone())
            };
            FlexItem::new(text)
        }));

        FlexNode::column(items).into()
    }
}

impl From<ListView> for Node {
    fn from(list: ListView) -> Self {
        list.into_node()
    }
}

/// A framed label, typically highlighted by the caller when focused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    /// Label text.
    pub label: String,
    /// Frame kind.
    pub border: BorderStyle,
    /// Frame color.
    pub border_color: Option<Color>,
    /// Inset around the label.
    pub padding: Padding,
    /// Label color.
    pub text_color: Option<Color>,
    /// Bold label.
    pub bold: bool,
}

impl ButtonView {
    /// A thin-bordered button with two columns of side padding.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            border: BorderStyle::Thin,
            border_color: None,
            padding: Padding::symmetric(0, 2),
            text_color: None,
            bold: false,
        }
    }

    /// Set the frame color (builder pattern).
    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set bold (builder pattern).
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Expand into a box around a text node.
    pub fn into_node(self) -> Node {
        let style = BoxStyle {
            border_color: self.border_color,
            ..BoxStyle::new()
                .with_border(self.border)
                .with_padding(self.padding)
        };
        let label = TextNode {
            color: self.text_color,
            ..TextNode::new(self.label).with_bold(self.bold)
        };
        BoxNode::new(style).with_child(label).into()
    }
}

impl From<ButtonView> for Node {
    fn from(button: ButtonView) -> Self {
        button.into_node()
    }
}

/// Positions content inside a fixed area, or the parent's area on any axis
/// left at `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementView {
    /// Area width; `0` takes the parent's width.
    pub area_width: usize,
    /// Area height; `0` takes the parent's height.
    pub area_height: usize,
    /// Horizontal placement.
    pub h_align: Alignment,
    /// Vertical placement.
    pub v_align: Alignment,
    /// Placed content.
    pub content: Vec<Node>,
}

impl PlacementView {
    /// Place content in the parent's area.
    pub fn new(h_align: Alignment, v_align: Alignment, content: impl IntoIterator<Item = Node>) -> Self {
        Self {
            h_align,
            v_align,
            content: content.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Use a fixed area (builder pattern).
    #[must_use]
    pub fn with_area(mut self, width: usize, height: usize) -> Self {
        self.area_width = width;
        self.area_height = height;
        self
    }

    /// Expand into a borderless aligning box.
    pub fn into_node(self) -> Node {
        let style = BoxStyle::new()
            .with_fill_width(self.area_width == 0)
            .with_fill_height(self.area_height == 0)
            .with_align(self.h_align, self.v_align);
        let content = View::sized(Size::new(self.area_width, self.area_height), self.content);
        BoxNode::new(style).with_content(content).into()
    }
}

impl From<PlacementView> for Node {
    fn from(placement: PlacementView) -> Self {
        placement.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::FlexDirection;

    #[test]
    fn test_list_expands_to_column() {
        let node = ListView::new("Tasks", ["one", "two"]).into_node();
        let Node::Flex(flex) = node else {
            panic!("expected flex");
        };
        assert_eq!(flex.direction, FlexDirection::Column);
        assert_eq!(flex.items.len(), 3);
        let Node::Text(title) = &flex.items[0].node else {
            panic!("expected text");
        };
        assert!(title.bold);
        let Node::Text(first) = &flex.items[1].node else {
            panic!("expected text");
        };
        assert_eq!(first.prefix.as_deref(), Some(DEFAULT_BULLET));
        assert!(first.wrap);
    }

    #[test]
    fn test_list_without_title_has_only_items() {
        let Node::Flex(flex) = ListView::new("", ["a"]).with_bullet("* ").into_node() else {
            panic!("expected flex");
        };
        assert_eq!(flex.items.len(), 1);
        let Node::Text(item) = &flex.items[0].node else {
            panic!("expected text");
        };
        assert_eq!(item.prefix.as_deref(), Some("* "));
    }

    #[test]
    fn test_placement_fills_unset_axes() {
        let Node::Box(node) = PlacementView::new(Alignment::Center, Alignment::End, [])
            .with_area(10, 0)
            .into_node()
        else {
            panic!("expected box");
        };
        assert!(!node.style.fill_width);
        assert!(node.style.fill_height);
        assert_eq!(node.content.map(|v| v.size), Some(Size::new(10, 0)));
    }
}
