//! View module: the declarative node tree handed to the renderer.
//!
//! Sizes flow top-down: every container decides the [`Size`] it offers each
//! child, and a dimension of `0` means the child picks its own.

mod builders;
mod geometry;
mod node;

pub use builders::{ButtonView, ListView, PlacementView, DEFAULT_BULLET};
pub use geometry::{Alignment, BorderStyle, Padding, Size};
pub use node::{
    AsciiArtNode, BoxNode, BoxStyle, FlexDirection, FlexItem, FlexNode, FlowNode, Node, TextNode,
    View,
};
