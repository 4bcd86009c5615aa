//! ASCII art rendering: literal lines, styled, never reflowed.

use super::Renderer;
use crate::text::{join_vertical, place_horizontal, Style};
use crate::view::{Alignment, AsciiArtNode, Size};

impl Renderer {
    pub(crate) fn render_ascii_art(&self, node: &AsciiArtNode, parent: Size) -> String {
        let style = Style::new().with_fg(node.color).with_bold(node.bold);
        let lines: Vec<String> = node
            .lines
            .iter()
            .map(|line| self.paint(line, style))
            .collect();
        let block = join_vertical(Alignment::Start, &lines);

        if parent.width > 0 {
            place_horizontal(parent.width, node.align, &block)
        } else {
            block
        }
    }
}
