//! View composition and node dispatch.

use tracing::trace;

use super::Renderer;
use crate::text::join_vertical;
use crate::view::{Alignment, Node, Size, View};

impl Renderer {
    /// Render a view tree to a string.
    ///
    /// An empty view renders as the empty string. Children that render to
    /// nothing are dropped; the rest are stacked top to bottom, each keeping
    /// its own width.
    pub fn render(&self, view: &View) -> String {
        let _span = tracing::trace_span!("render", size = ?view.size).entered();
        self.render_children(&view.children, view.size)
    }

    /// Compose sibling nodes under a shared size.
    pub(crate) fn render_children(&self, children: &[Node], size: Size) -> String {
        if children.is_empty() {
            return String::new();
        }

        let blocks: Vec<String> = children
            .iter()
            .map(|child| self.render_node(child, size))
            .filter(|block| !block.is_empty())
            .collect();

        join_vertical(Alignment::Start, &blocks)
    }

    /// Render a single node against the size its parent offers.
    pub fn render_node(&self, node: &Node, size: Size) -> String {
        trace!(kind = kind_name(node), ?size, "render node");
        match node {
            Node::Box(node) => self.render_box(node, size),
            Node::Flex(node) => self.render_flex(node, size),
            Node::Flow(node) => self.render_flow(node, size),
            Node::Text(node) => self.render_text(node, size),
            Node::AsciiArt(node) => self.render_ascii_art(node, size),
        }
    }
}

const fn kind_name(node: &Node) -> &'static str {
    match node {
        Node::Box(_) => "box",
        Node::Flex(_) => "flex",
        Node::Flow(_) => "flow",
        Node::Text(_) => "text",
        Node::AsciiArt(_) => "ascii_art",
    }
}
