//! # Cellframe
//!
//! A declarative layout engine for terminal UIs.
//!
//! Callers describe a screen as a tree of nodes and get back a single string
//! of terminal lines, ready to be written to the screen as-is.
//!
//! ## Core Concepts
//!
//! - **Views and nodes**: a [`View`] is a sized region holding [`Node`]s
//! - **Top-down sizing**: containers decide the size each child is offered
//! - **Flex and flow**: deterministic width distribution and column tiling
//! - **Pure rendering**: one synchronous walk per frame, no caches, no I/O
//!
//! ## Example
//!
//! ```rust
//! use cellframe::{render, FlexItem, FlexNode, Node, Size, View};
//!
//! let row = FlexNode::row([FlexItem::new("left").with_width(10), FlexItem::new("right")]);
//! let out = render(&View::sized(Size::new(30, 0), [Node::from(row)]));
//! assert!(out.starts_with("left      right"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod render;
pub mod text;
pub mod view;

// Re-exports for convenience
pub use error::ParseError;
pub use render::{render, RenderConfig, Renderer, NO_COLOR_ENV};
pub use text::{Color, Modifiers, Rgb, Style};
pub use view::{
    Alignment, AsciiArtNode, BorderStyle, BoxNode, BoxStyle, ButtonView, FlexDirection, FlexItem,
    FlexNode, FlowNode, ListView, Node, Padding, PlacementView, Size, TextNode, View,
    DEFAULT_BULLET,
};
