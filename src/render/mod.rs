//! Render module: turns a [`View`] tree into a string of terminal lines.
//!
//! Rendering is a single synchronous walk. Sizes travel down the tree,
//! rendered blocks travel back up, and nothing is cached between calls:
//! every frame is recomputed from scratch.
//!
//! # Example
//!
//! ```
//! use cellframe::{render, BorderStyle, BoxNode, BoxStyle, Node, Size, TextNode, View};
//!
//! let card = BoxNode::new(BoxStyle::new().with_border(BorderStyle::Thin).filled())
//!     .with_child(TextNode::new("hello"));
//! let out = render(&View::sized(Size::new(12, 3), [Node::from(card)]));
//! assert_eq!(out.lines().count(), 3);
//! ```

mod art;
mod boxes;
mod composer;
mod flex;
mod flow;
mod text;

use crate::text::{styled, Color, Style};
use crate::view::View;

/// Environment variable that disables styling when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Configuration for the [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit ANSI SGR sequences for colors and bold. Geometry is identical
    /// either way.
    pub ansi: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { ansi: true }
    }
}

impl RenderConfig {
    /// Unstyled output.
    pub const fn plain() -> Self {
        Self { ansi: false }
    }

    /// Default configuration, with styling disabled when `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
        Self { ansi: !no_color }
    }
}

/// Renders view trees.
///
/// Holds only configuration, so one renderer can be shared freely and used
/// for any number of independent trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom configuration.
    pub const fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> RenderConfig {
        self.config
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.config.ansi {
            styled(text, style)
        } else {
            text.to_string()
        }
    }

    fn border_color(&self, color: Option<Color>) -> Option<Color> {
        color.filter(|_| self.config.ansi)
    }
}

/// Render a view with the default configuration.
pub fn render(view: &View) -> String {
    Renderer::new().render(view)
}
