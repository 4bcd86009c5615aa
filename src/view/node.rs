//! The node tree.
//!
//! A [`View`] is a sized region holding an ordered list of [`Node`]s. Nodes
//! own their children by value; a tree is rebuilt for every frame and never
//! mutated while it is being rendered.

use std::str::FromStr;

use super::geometry::{Alignment, BorderStyle, Padding, Size};
use crate::error::ParseError;
use crate::text::Color;

/// A rectangular region containing zero or more nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct View {
    /// Size offered to the children; `0` on an axis means intrinsic.
    pub size: Size,
    /// Children, rendered top to bottom.
    pub children: Vec<Node>,
}

impl View {
    /// An unsized view over the given children.
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            size: Size::UNCONSTRAINED,
            children: children.into_iter().collect(),
        }
    }

    /// A view of a known size.
    pub fn sized(size: Size, children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(children).with_size(size)
    }

    /// Set the size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Append a child (builder pattern).
    #[must_use]
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

/// Every kind of renderable node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Bordered, padded single-view container.
    Box(BoxNode),
    /// Single-axis distributing container.
    Flex(FlexNode),
    /// Multi-column wrapping grid.
    Flow(FlowNode),
    /// Styled, optionally wrapped text.
    Text(TextNode),
    /// Literal pre-formatted lines.
    AsciiArt(AsciiArtNode),
}

/// Visual configuration of a [`BoxNode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    /// Frame kind.
    pub border: BorderStyle,
    /// Frame color, terminal default when `None`.
    pub border_color: Option<Color>,
    /// Inset between frame and content.
    pub padding: Padding,
    /// Expand to the parent's width instead of the content's.
    pub fill_width: bool,
    /// Expand to the parent's height instead of the content's.
    pub fill_height: bool,
    /// Horizontal placement of the content inside the box.
    pub h_align: Alignment,
    /// Vertical placement of the content inside the box.
    pub v_align: Alignment,
}

impl BoxStyle {
    /// Default style: no border, no padding, intrinsic size.
    pub const fn new() -> Self {
        Self {
            border: BorderStyle::None,
            border_color: None,
            padding: Padding::ZERO,
            fill_width: false,
            fill_height: false,
            h_align: Alignment::Start,
            v_align: Alignment::Start,
        }
    }

    /// Set the border (builder pattern).
    #[must_use]
    pub const fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the border color (builder pattern).
    #[must_use]
    pub const fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set the padding (builder pattern).
    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Fill the parent on both axes (builder pattern).
    #[must_use]
    pub const fn filled(mut self) -> Self {
        self.fill_width = true;
        self.fill_height = true;
        self
    }

    /// Fill the parent's width (builder pattern).
    #[must_use]
    pub const fn with_fill_width(mut self, fill: bool) -> Self {
        self.fill_width = fill;
        self
    }

    /// Fill the parent's height (builder pattern).
    #[must_use]
    pub const fn with_fill_height(mut self, fill: bool) -> Self {
        self.fill_height = fill;
        self
    }

    /// Set content alignment (builder pattern).
    #[must_use]
    pub const fn with_align(mut self, h_align: Alignment, v_align: Alignment) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}

/// A bordered, padded container hosting one view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxNode {
    /// Frame, padding, fill and alignment.
    pub style: BoxStyle,
    /// Content; an empty frame is drawn when `None`.
    pub content: Option<View>,
}

impl BoxNode {
    /// An empty box with the given style.
    pub fn new(style: BoxStyle) -> Self {
        Self {
            style,
            content: None,
        }
    }

    /// Replace the content view (builder pattern).
    #[must_use]
    pub fn with_content(mut self, view: View) -> Self {
        self.content = Some(view);
        self
    }

    /// Append a child to the content view, creating it if needed.
    #[must_use]
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.content
            .get_or_insert_with(View::default)
            .children
            .push(node.into());
        self
    }
}

/// Layout axis of a [`FlexNode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    /// Items side by side, sharing the parent's width.
    #[default]
    Row,
    /// Items stacked, each at the parent's width.
    Column,
}

impl FromStr for FlexDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "row" => Ok(Self::Row),
            "column" | "col" => Ok(Self::Column),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// One child of a [`FlexNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlexItem {
    /// The rendered node.
    pub node: Node,
    /// Fixed width in row mode. `None` or `0` makes the item flexible.
    pub width: Option<usize>,
    /// Fixed height in column mode. `None` or `0` means intrinsic.
    pub height: Option<usize>,
    /// Share of leftover row width relative to flexible siblings.
    pub grow: Option<u32>,
}

impl FlexItem {
    /// A flexible item.
    pub fn new(node: impl Into<Node>) -> Self {
        Self {
            node: node.into(),
            width: None,
            height: None,
            grow: None,
        }
    }

    /// Pin the width (builder pattern).
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Pin the height (builder pattern).
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the grow weight (builder pattern).
    #[must_use]
    pub fn with_grow(mut self, grow: u32) -> Self {
        self.grow = Some(grow);
        self
    }

    /// The explicit width, treating `Some(0)` as unset.
    #[inline]
    pub fn fixed_width(&self) -> Option<usize> {
        self.width.filter(|&w| w > 0)
    }

    /// The explicit height, treating `Some(0)` as unset.
    #[inline]
    pub fn fixed_height(&self) -> Option<usize> {
        self.height.filter(|&h| h > 0)
    }
}

/// Distributes width across items (row) or stacks them (column).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlexNode {
    /// Layout axis.
    pub direction: FlexDirection,
    /// Blank cells between adjacent items along the axis.
    pub spacing: usize,
    /// Children in order.
    pub items: Vec<FlexItem>,
}

impl FlexNode {
    /// A row of items.
    pub fn row(items: impl IntoIterator<Item = FlexItem>) -> Self {
        Self {
            direction: FlexDirection::Row,
            spacing: 0,
            items: items.into_iter().collect(),
        }
    }

    /// A column of items.
    pub fn column(items: impl IntoIterator<Item = FlexItem>) -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Self::row(items)
        }
    }

    /// Set the spacing (builder pattern).
    #[must_use]
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Tiles equally sized items into as many columns as fit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowNode {
    /// Narrowest acceptable column.
    pub item_min_width: usize,
    /// Blank columns between items in a row.
    pub item_spacing: usize,
    /// Blank rows between rows of items.
    pub row_spacing: usize,
    /// Children in row-major order.
    pub items: Vec<Node>,
}

impl FlowNode {
    /// A flow of items with the given minimum column width.
    pub fn new(item_min_width: usize, items: impl IntoIterator<Item = Node>) -> Self {
        Self {
            item_min_width,
            item_spacing: 0,
            row_spacing: 0,
            items: items.into_iter().collect(),
        }
    }

    /// Set item and row spacing (builder pattern).
    #[must_use]
    pub fn with_spacing(mut self, item_spacing: usize, row_spacing: usize) -> Self {
        self.item_spacing = item_spacing;
        self.row_spacing = row_spacing;
        self
    }
}

/// A styled run of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextNode {
    /// The text; may contain newlines.
    pub value: String,
    /// Foreground color.
    pub color: Option<Color>,
    /// Bold weight.
    pub bold: bool,
    /// Word-wrap to the available width.
    pub wrap: bool,
    /// Placement of each line within the available width.
    pub align: Alignment,
    /// Prepended to the first line, e.g. a bullet.
    pub prefix: Option<String>,
    /// Prepended to later lines; defaults to spaces as wide as `prefix`.
    pub continuation_prefix: Option<String>,
    /// Cut lines wider than the available width.
    pub truncate: bool,
    /// Appended to cut lines; defaults to `"..."`.
    pub truncation_suffix: Option<String>,
}

impl TextNode {
    /// Plain text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set bold (builder pattern).
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Enable word wrapping (builder pattern).
    #[must_use]
    pub fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Set alignment (builder pattern).
    #[must_use]
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the first-line prefix (builder pattern).
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the prefix for wrapped lines (builder pattern).
    #[must_use]
    pub fn with_continuation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.continuation_prefix = Some(prefix.into());
        self
    }

    /// Enable truncation with the default suffix (builder pattern).
    #[must_use]
    pub fn truncated(mut self) -> Self {
        self.truncate = true;
        self
    }

    /// Enable truncation with a custom suffix (builder pattern).
    #[must_use]
    pub fn truncated_with(mut self, suffix: impl Into<String>) -> Self {
        self.truncate = true;
        self.truncation_suffix = Some(suffix.into());
        self
    }
}

/// Pre-formatted lines rendered verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiArtNode {
    /// Lines in display order; never wrapped.
    pub lines: Vec<String>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Bold weight.
    pub bold: bool,
    /// Placement of the whole block within the available width.
    pub align: Alignment,
}

impl AsciiArtNode {
    /// Art from lines.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set bold (builder pattern).
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set alignment (builder pattern).
    #[must_use]
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

impl From<BoxNode> for Node {
    fn from(node: BoxNode) -> Self {
        Self::Box(node)
    }
}

impl From<FlexNode> for Node {
    fn from(node: FlexNode) -> Self {
        Self::Flex(node)
    }
}

impl From<FlowNode> for Node {
    fn from(node: FlowNode) -> Self {
        Self::Flow(node)
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<AsciiArtNode> for Node {
    fn from(node: AsciiArtNode) -> Self {
        Self::AsciiArt(node)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(TextNode::new(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(TextNode::new(value))
    }
}
