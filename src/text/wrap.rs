//! Greedy word wrapping.

use std::borrow::Cow;

use textwrap::{Options, WordSeparator, WrapAlgorithm};

/// Pack whitespace-separated words into lines no wider than `width`.
///
/// First-fit: a word joins the current line when it fits together with one
/// separating space, otherwise it starts a new line. Runs of whitespace,
/// tabs included, collapse to that single space. Words wider than `width`
/// are kept whole on a line of their own. Embedded newlines are hard
/// breaks. A `width` of 0 only splits on newlines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    text.split('\n')
        .flat_map(|line| {
            let words = line.split_whitespace().collect::<Vec<_>>().join(" ");
            textwrap::wrap(&words, &options)
                .into_iter()
                .map(Cow::into_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}
