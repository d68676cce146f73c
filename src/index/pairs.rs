//! Anagram-pair validation
//!
//! The third query operation: is a submitted word pair a legal anagram move
//! for the current letter budget? Total over all inputs; anything malformed
//! is simply an invalid pair, never an error.

use super::groups::AnagramIndex;
use crate::core::{LetterBudget, same_letters};

impl AnagramIndex {
    /// Whether `word1`/`word2` form a valid anagram pair under `budget`
    ///
    /// Valid means all of: both words are corpus members, both at least three
    /// letters, equal length, not the same word once lowercased, anagrams of
    /// each other, and `word1` assemblable from the budget with per-letter
    /// multiplicity (its partner uses the same tiles by definition).
    /// Case-insensitive throughout.
    ///
    /// # Examples
    /// ```
    /// use anagame::core::LetterBudget;
    /// use anagame::index::AnagramIndex;
    ///
    /// let index = AnagramIndex::build(["rat", "tar", "stop", "pots"]);
    /// let budget = LetterBudget::try_from_letters("potsria").unwrap();
    ///
    /// assert!(index.is_valid_pair("rat", "tar", &budget));
    /// assert!(!index.is_valid_pair("rat", "rat", &budget));
    /// assert!(!index.is_valid_pair("rat", "stop", &budget));
    /// ```
    #[must_use]
    pub fn is_valid_pair(&self, word1: &str, word2: &str, budget: &LetterBudget) -> bool {
        let w1 = word1.to_ascii_lowercase();
        let w2 = word2.to_ascii_lowercase();

        if !self.contains(&w1) || !self.contains(&w2) {
            return false;
        }
        if w1.len() < 3 || w1.len() != w2.len() {
            return false;
        }
        if w1 == w2 {
            return false;
        }
        if !same_letters(&w1, &w2) {
            return false;
        }
        budget.can_spell(&w1)
    }
}
