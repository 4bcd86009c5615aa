//! Text rendering.

use tracing::trace;

use super::Renderer;
use crate::text::{
    line_width, place_horizontal, spaces, truncate, wrap_words, Style, DEFAULT_TRUNCATION_SUFFIX,
};
use crate::view::{Size, TextNode};

impl Renderer {
    /// The lines a text node produces at `width` columns (`0` = unknown).
    ///
    /// Lines are prefixed, wrapped or split on newlines, truncated when
    /// asked, styled, and finally placed within `width`.
    pub fn text_lines(&self, node: &TextNode, width: usize) -> Vec<String> {
        let prefix = node.prefix.as_deref().unwrap_or("");
        let prefix_width = line_width(prefix);
        let continuation = node
            .continuation_prefix
            .clone()
            .unwrap_or_else(|| spaces(prefix_width));

        let raw = if node.wrap && width > 0 {
            let wrap_width = width.saturating_sub(prefix_width);
            trace!(width, wrap_width, "wrap text");
            wrap_words(&node.value, wrap_width)
        } else {
            node.value.split('\n').map(str::to_string).collect()
        };

        let suffix = node
            .truncation_suffix
            .as_deref()
            .unwrap_or(DEFAULT_TRUNCATION_SUFFIX);
        let style = Style::new().with_fg(node.color).with_bold(node.bold);

        raw.into_iter()
            .enumerate()
            .map(|(i, line)| {
                let lead = if i == 0 { prefix } else { continuation.as_str() };
                let mut line = format!("{lead}{line}");
                if node.truncate && width > 0 && line_width(&line) > width {
                    line = truncate(&line, width, suffix);
                }
                let painted = self.paint(&line, style);
                if width > 0 {
                    place_horizontal(width, node.align, &painted)
                } else {
                    painted
                }
            })
            .collect()
    }

    pub(crate) fn render_text(&self, node: &TextNode, parent: Size) -> String {
        self.text_lines(node, parent.width).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderConfig;
    use crate::text::{display_width, strip_ansi, Color};
    use crate::view::Alignment;

    fn plain() -> Renderer {
        Renderer::with_config(RenderConfig::plain())
    }

    #[test]
    fn test_wraps_at_width() {
        let node = TextNode::new("abc def ghij").wrapped();
        assert_eq!(plain().text_lines(&node, 7), vec!["abc def", "ghij   "]);
    }

    #[test]
    fn test_wrapping_collapses_whitespace_runs() {
        let node = TextNode::new("ab    cd\tef").wrapped();
        assert_eq!(plain().text_lines(&node, 10), vec!["ab cd ef  "]);
    }

    #[test]
    fn test_stray_escape_does_not_abort() {
        let node = TextNode::new("\x1bé ok");
        let lines = plain().text_lines(&node, 10);
        assert_eq!(lines.len(), 1);
        assert_eq!(display_width(&lines[0]), 10);
    }

    #[test]
    fn test_unknown_width_leaves_text_alone() {
        let node = TextNode::new("abc def ghij").wrapped();
        assert_eq!(plain().render_text(&node, Size::UNCONSTRAINED), "abc def ghij");
    }

    #[test]
    fn test_newlines_split_without_wrap() {
        let node = TextNode::new("one\ntwo");
        assert_eq!(plain().render_text(&node, Size::new(5, 0)), "one  \ntwo  ");
    }

    #[test]
    fn test_prefix_and_hanging_continuation() {
        let node = TextNode::new("alpha beta gamma").wrapped().with_prefix("- ");
        assert_eq!(
            plain().text_lines(&node, 12),
            vec!["- alpha beta", "  gamma     "]
        );
    }

    #[test]
    fn test_custom_continuation_prefix() {
        let node = TextNode::new("alpha beta")
            .wrapped()
            .with_prefix("> ")
            .with_continuation_prefix("| ");
        assert_eq!(plain().text_lines(&node, 8), vec!["> alpha ", "| beta  "]);
    }

    #[test]
    fn test_truncates_with_default_suffix() {
        let node = TextNode::new("abcdefghij").truncated();
        assert_eq!(plain().text_lines(&node, 6), vec!["abc..."]);
    }

    #[test]
    fn test_truncates_with_custom_suffix() {
        let node = TextNode::new("abcdefghij").truncated_with("…");
        assert_eq!(plain().text_lines(&node, 6), vec!["abcde…"]);
    }

    #[test]
    fn test_truncation_counts_prefix() {
        let node = TextNode::new("abcdefgh").with_prefix("* ").truncated();
        assert_eq!(plain().text_lines(&node, 7), vec!["* ab..."]);
    }

    #[test]
    fn test_suffix_too_wide_hard_cuts() {
        let node = TextNode::new("abcdef").truncated();
        assert_eq!(plain().text_lines(&node, 3), vec!["abc"]);
    }

    #[test]
    fn test_without_truncate_long_lines_overflow() {
        let node = TextNode::new("abcdefgh");
        assert_eq!(plain().text_lines(&node, 4), vec!["abcdefgh"]);
    }

    #[test]
    fn test_alignment_per_line() {
        let node = TextNode::new("ab\nabcd").with_align(Alignment::Center);
        assert_eq!(plain().text_lines(&node, 6), vec!["  ab  ", " abcd "]);

        let node = TextNode::new("ab").with_align(Alignment::End);
        assert_eq!(plain().text_lines(&node, 5), vec!["   ab"]);
    }

    #[test]
    fn test_styled_lines_keep_geometry() {
        let node = TextNode::new("hello world")
            .wrapped()
            .with_color(Color::Indexed(2))
            .with_bold(true);
        let lines = Renderer::new().text_lines(&node, 8);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains('\x1b'));
        assert_eq!(strip_ansi(&lines[0]), "hello   ");
        assert!(lines.iter().all(|line| display_width(line) == 8));
    }
}
