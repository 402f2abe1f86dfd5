//! Raw text to word sequence conversion.

mod text_utils;

use alloc::{string::String, vec::Vec};

pub use text_utils::first_words_excerpt;

/// Ordered words of one playback run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for WordSequence {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl<'a> FromIterator<&'a str> for WordSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(String::from).collect(),
        }
    }
}

/// Split `text` on runs of whitespace.
///
/// Leading and trailing whitespace is ignored, so blank input yields an empty
/// sequence. Words are kept verbatim: no case folding, no punctuation
/// stripping.
pub fn tokenize(text: &str) -> WordSequence {
    let text = text.trim();
    let mut words = Vec::new();
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = text_utils::next_word_at(text, cursor) {
        words.push(String::from(word));
        cursor = next_cursor;
    }

    WordSequence::from(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(sequence: &WordSequence) -> Vec<&str> {
        sequence.iter().collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        let sequence = tokenize("  a   b\tc ");
        assert_eq!(words(&sequence), ["a", "b", "c"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\t \r\n").is_empty());
    }

    #[test]
    fn keeps_punctuation_and_case() {
        let sequence = tokenize("Hello, World...\nEnd.");
        assert_eq!(words(&sequence), ["Hello,", "World...", "End."]);
        assert_eq!(sequence.last_index(), Some(2));
    }

    #[test]
    fn handles_multibyte_words_and_unicode_spaces() {
        let sequence = tokenize("vivía\u{00a0}un  hidalgo");
        assert_eq!(words(&sequence), ["vivía", "un", "hidalgo"]);
    }

    #[test]
    fn excerpt_stops_after_word_budget() {
        assert_eq!(first_words_excerpt("  one two three four", 2), "one two");
        assert_eq!(first_words_excerpt("one", 5), "one");
        assert_eq!(first_words_excerpt("one two", 0), "");
    }
}
