//! Word / separator scanning
//!
//! A definition is split into maximal runs that are either all separator
//! characters or all non-separator characters. Runs alternate, are never
//! empty, and concatenate back to the original text:
//!
//! ```text
//! "A cat's rival."  →  ["A", " ", "cat's", " ", "rival", "."]
//! ```
//!
//! Classification is per `char`; there is no Unicode word segmentation.

use std::collections::BTreeSet;

/// Characters separating the words of a definition.
const DEFAULT_SEPARATORS: &str = ", .!?-";

/// The set of characters treated as token boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Build a set from every character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    /// Comma, space, period, exclamation mark, question mark and hyphen.
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

/// Return the word or separator run of `text` that starts at byte offset
/// `position`.
///
/// If the character at `position` is a separator the result is the longest
/// run of separators starting there, otherwise the longest run of
/// non-separators. The run ends at the end of `text` or just before the first
/// character of the other class.
///
/// # Panics
///
/// `position` must be less than `text.len()` and lie on a char boundary.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> &'a str {
    assert!(
        position < text.len(),
        "position {} out of range for text of length {}",
        position,
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position {} is not on a char boundary",
        position
    );

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let in_separator_run = match chars.next() {
        Some((_, first)) => separators.contains(first),
        None => unreachable!("position < text.len() leaves at least one char"),
    };

    let end = chars
        .find(|&(_, c)| separators.contains(c) != in_separator_run)
        .map(|(offset, _)| offset)
        .unwrap_or(rest.len());

    &rest[..end]
}

/// Iterator over the successive runs of a text, starting at offset 0.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let token = next_word_or_separator(self.text, self.position, self.separators);
        self.position += token.len();
        Some(token)
    }
}

/// Split `text` into alternating word and separator runs.
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A cat's rival.", 0, "A")]
    #[case("A cat's rival.", 1, " ")]
    #[case("A cat's rival.", 2, "cat's")]
    #[case("A cat's rival.", 8, "rival")]
    #[case("A cat's rival.", 13, ".")]
    #[case("Wait... what?!", 4, "... ")]
    #[case("Wait... what?!", 7, " ")]
    #[case("Wait... what?!", 8, "what")]
    #[case("Wait... what?!", 12, "?!")]
    #[case("well-known, fact", 4, "-")]
    #[case("well-known, fact", 10, ", ")]
    #[case("single", 0, "single")]
    #[case("single", 3, "gle")]
    #[case(" , ", 0, " , ")]
    fn scans_maximal_runs(#[case] text: &str, #[case] position: usize, #[case] expected: &str) {
        let separators = SeparatorSet::default();
        assert_eq!(next_word_or_separator(text, position, &separators), expected);
    }

    #[test]
    fn apostrophe_is_not_a_separator() {
        let separators = SeparatorSet::default();
        let tokens: Vec<_> = tokenize("A cat's rival.", &separators).collect();
        assert_eq!(tokens, vec!["A", " ", "cat's", " ", "rival", "."]);
    }

    #[test]
    fn custom_separator_set() {
        let separators = SeparatorSet::from_chars(";");
        let tokens: Vec<_> = tokenize("a b;c;;d", &separators).collect();
        assert_eq!(tokens, vec!["a b", ";", "c", ";;", "d"]);
    }

    #[test]
    fn empty_separator_set_yields_whole_text() {
        let separators = SeparatorSet::from_chars("");
        let tokens: Vec<_> = tokenize("one, two.", &separators).collect();
        assert_eq!(tokens, vec!["one, two."]);
    }

    #[test]
    fn multibyte_characters_stay_inside_words() {
        let separators = SeparatorSet::default();
        let tokens: Vec<_> = tokenize("naïve café, déjà-vu", &separators).collect();
        assert_eq!(tokens, vec!["naïve", " ", "café", ", ", "déjà", "-", "vu"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        let separators = SeparatorSet::default();
        assert_eq!(tokenize("", &separators).count(), 0);
    }

    #[test]
    fn default_set_has_six_separators() {
        let separators = SeparatorSet::default();
        assert_eq!(separators.len(), 6);
        for c in [',', ' ', '.', '!', '?', '-'] {
            assert!(separators.contains(c), "{:?} should be a separator", c);
        }
        assert!(!separators.contains('\''));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn position_past_end_panics() {
        let separators = SeparatorSet::default();
        next_word_or_separator("cat", 3, &separators);
    }

    #[test]
    #[should_panic(expected = "char boundary")]
    fn position_inside_a_char_panics() {
        let separators = SeparatorSet::default();
        next_word_or_separator("é", 1, &separators);
    }
}
