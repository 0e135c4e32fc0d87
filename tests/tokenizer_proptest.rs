//! Property-based tests for the word/separator scanner and the term sorter

use glossary::glossary::{next_word_or_separator, tokenize, Glossary, SeparatorSet};
use proptest::prelude::*;

/// Text drawn mostly from separators and a few word characters so that runs
/// of both kinds show up often.
fn definition_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just(','),
            Just('.'),
            Just('!'),
            Just('?'),
            Just('-'),
            Just('\''),
            Just('é'),
            prop::char::range('a', 'f'),
            prop::char::range('A', 'C'),
        ],
        1..40,
    )
    .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

/// Text with a valid char-boundary offset into it.
fn text_and_position() -> impl Strategy<Value = (String, usize)> {
    definition_strategy().prop_flat_map(|text: String| {
        let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        (Just(text), prop::sample::select(boundaries))
    })
}

proptest! {
    #[test]
    fn tokens_reconstruct_the_text(text in definition_strategy()) {
        let separators = SeparatorSet::default();
        let joined: String = tokenize(&text, &separators).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn token_is_a_maximal_homogeneous_run((text, position) in text_and_position()) {
        let separators = SeparatorSet::default();
        let token = next_word_or_separator(&text, position, &separators);

        prop_assert!(!token.is_empty());
        prop_assert!(text[position..].starts_with(token));

        let first_is_separator = separators.contains(token.chars().next().unwrap());
        prop_assert!(token.chars().all(|c| separators.contains(c) == first_is_separator));

        let end = position + token.len();
        if let Some(next) = text[end..].chars().next() {
            prop_assert_ne!(separators.contains(next), first_is_separator);
        }
    }

    #[test]
    fn consecutive_tokens_alternate_kind(text in definition_strategy()) {
        let separators = SeparatorSet::default();
        let kinds: Vec<bool> = tokenize(&text, &separators)
            .map(|t| separators.contains(t.chars().next().unwrap()))
            .collect();
        for pair in kinds.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn custom_separator_sets_still_reconstruct(
        text in definition_strategy(),
        custom in "[a-c!']{0,3}",
    ) {
        let separators = SeparatorSet::from_chars(&custom);
        let joined: String = tokenize(&text, &separators).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn sorted_terms_are_an_ordered_permutation(
        entries in prop::collection::hash_map("[a-zA-Z_]{1,8}", "[a-z ]{0,12}", 0..20)
    ) {
        let glossary: Glossary = entries.clone().into_iter().collect();
        let before = glossary.clone();

        let terms = glossary.sorted_terms();

        prop_assert_eq!(terms.len(), entries.len());
        prop_assert!(terms.windows(2).all(|w| w[0] < w[1]));
        for term in &terms {
            prop_assert!(entries.contains_key(term));
        }
        prop_assert_eq!(glossary, before);
    }
}
