//! Pair checking command
//!
//! Validates a single word pair against a letter budget and explains which
//! condition failed, for the CLI verdict.

use crate::core::{LetterBudget, same_letters};
use crate::index::AnagramIndex;
use std::fmt;

/// First validation condition a pair failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairFailure {
    NotInCorpus(String),
    TooShort(String),
    LengthMismatch,
    IdenticalWords,
    NotAnagrams,
    ExceedsBudget,
}

impl fmt::Display for PairFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInCorpus(word) => write!(f, "'{word}' is not in the word list"),
            Self::TooShort(word) => write!(f, "'{word}' is shorter than 3 letters"),
            Self::LengthMismatch => write!(f, "the words differ in length"),
            Self::IdenticalWords => write!(f, "the words are the same word"),
            Self::NotAnagrams => write!(f, "the words are not anagrams of each other"),
            Self::ExceedsBudget => write!(f, "the pair needs letters the draw does not have"),
        }
    }
}

/// Verdict for one checked pair
pub struct CheckReport {
    pub word1: String,
    pub word2: String,
    /// `None` when the pair is a valid anagram move
    pub failure: Option<PairFailure>,
}

impl CheckReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Check a pair and report the first failing condition
///
/// Evaluates the same conditions as [`AnagramIndex::is_valid_pair`], in the
/// same order, so the verdict always agrees with the engine.
#[must_use]
pub fn check_pair(
    index: &AnagramIndex,
    word1: &str,
    word2: &str,
    budget: &LetterBudget,
) -> CheckReport {
    let w1 = word1.to_ascii_lowercase();
    let w2 = word2.to_ascii_lowercase();

    let failure = if !index.contains(&w1) {
        Some(PairFailure::NotInCorpus(w1.clone()))
    } else if !index.contains(&w2) {
        Some(PairFailure::NotInCorpus(w2.clone()))
    } else if w1.len() < 3 {
        Some(PairFailure::TooShort(w1.clone()))
    } else if w1.len() != w2.len() {
        Some(PairFailure::LengthMismatch)
    } else if w1 == w2 {
        Some(PairFailure::IdenticalWords)
    } else if !same_letters(&w1, &w2) {
        Some(PairFailure::NotAnagrams)
    } else if !budget.can_spell(&w1) {
        Some(PairFailure::ExceedsBudget)
    } else {
        None
    };

    CheckReport {
        word1: w1,
        word2: w2,
        failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_index() -> AnagramIndex {
        AnagramIndex::build(["rat", "mouse", "tar", "art", "chicken", "stop", "pots", "tops"])
    }

    #[test]
    fn valid_pair_has_no_failure() {
        let budget = LetterBudget::try_from_letters("potsria").unwrap();
        let report = check_pair(&game_index(), "rat", "tar", &budget);
        assert!(report.is_valid());
    }

    #[test]
    fn reports_first_failing_condition() {
        let index = game_index();
        let budget = LetterBudget::try_from_letters("potsria").unwrap();

        assert_eq!(
            check_pair(&index, "star", "rats", &budget).failure,
            Some(PairFailure::NotInCorpus("star".into()))
        );
        assert_eq!(
            check_pair(&index, "Rat", "rat", &budget).failure,
            Some(PairFailure::IdenticalWords)
        );
        assert_eq!(
            check_pair(&index, "rat", "stop", &budget).failure,
            Some(PairFailure::LengthMismatch)
        );
        assert_eq!(
            check_pair(&index, "rat", "art", &LetterBudget::try_from_letters("xyz").unwrap())
                .failure,
            Some(PairFailure::ExceedsBudget)
        );
        assert_eq!(
            check_pair(&index, "mouse", "chicken", &budget).failure,
            Some(PairFailure::LengthMismatch)
        );
    }

    #[test]
    fn verdict_agrees_with_engine() {
        let index = game_index();
        let budget = LetterBudget::try_from_letters("potsria").unwrap();
        let words = ["rat", "tar", "art", "stop", "pots", "tops", "mouse", "star", "Rat", ""];
        for a in words {
            for b in words {
                assert_eq!(
                    check_pair(&index, a, b, &budget).is_valid(),
                    index.is_valid_pair(a, b, &budget),
                    "verdict mismatch for ({a}, {b})"
                );
            }
        }
    }
}
