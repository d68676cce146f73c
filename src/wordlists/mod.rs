//! Word lists for the anagram game
//!
//! Provides the embedded game corpus compiled into the binary, plus loading
//! utilities for custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AnagramIndex;

    #[test]
    fn word_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn corpus_words_are_valid() {
        for &word in WORDS {
            assert!(
                (3..=7).contains(&word.len()),
                "Word '{word}' is outside the 3-7 letter range"
            );
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn corpus_is_sorted_and_duplicate_free() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn corpus_is_rich_in_anagram_families() {
        let index = AnagramIndex::build(WORDS.iter().copied());
        let offered = index
            .reachable_anagram_words(&crate::core::LetterBudget::unrestricted())
            .len();
        // The embedded list exists to make rounds playable; a thin corpus
        // would starve the letter lottery
        assert!(offered >= 100, "only {offered} anagram words offered");
    }
}
