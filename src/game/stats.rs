//! End-of-round statistics
//!
//! Scores a round's guesses against the maximal achievable set of anagram
//! words for the drawn letters.

use crate::core::LetterBudget;
use crate::index::AnagramIndex;
use std::collections::BTreeSet;

/// Aggregated results of one round
///
/// `accuracy` and `skill` are truncated integer percentages: 3 valid guesses
/// out of 8 is an accuracy of 37, and 66 of 99 reachable words guessed is a
/// skill of 66.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStats {
    /// Pairs scored as valid, lowercased, in submission order
    pub valid: Vec<(String, String)>,
    /// Everything else, including repeats of already-scored pairs
    pub invalid: Vec<(String, String)>,
    /// One point per valid pair
    pub score: usize,
    /// Valid guesses out of all guesses, truncated percent (0 for no guesses)
    pub accuracy: u32,
    /// Distinct words appearing in valid pairs
    pub guessed: BTreeSet<String>,
    /// Reachable anagram words the player never used
    pub missed: BTreeSet<String>,
    /// Guessed words out of all reachable words, truncated percent
    pub skill: u32,
}

impl RoundStats {
    /// Score `guesses` against `budget` and the corpus behind `index`
    ///
    /// A pair is valid on first submission if it passes
    /// [`AnagramIndex::is_valid_pair`]; resubmitting a pair that already
    /// scored (in either word order) counts as invalid. Zero guesses or zero
    /// reachable words yield zero percentages, never a division error.
    #[must_use]
    pub fn compute(
        guesses: &[(String, String)],
        budget: &LetterBudget,
        index: &AnagramIndex,
    ) -> Self {
        let reachable: BTreeSet<String> = index
            .reachable_anagram_words(budget)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut valid: Vec<(String, String)> = Vec::new();
        let mut invalid: Vec<(String, String)> = Vec::new();
        let mut scored: BTreeSet<(String, String)> = BTreeSet::new();
        let mut guessed: BTreeSet<String> = BTreeSet::new();

        for (first, second) in guesses {
            let pair = (first.to_ascii_lowercase(), second.to_ascii_lowercase());
            let unordered = if pair.0 <= pair.1 {
                pair.clone()
            } else {
                (pair.1.clone(), pair.0.clone())
            };
            if !scored.contains(&unordered) && index.is_valid_pair(&pair.0, &pair.1, budget) {
                guessed.insert(pair.0.clone());
                guessed.insert(pair.1.clone());
                scored.insert(unordered);
                valid.push(pair);
            } else {
                invalid.push(pair);
            }
        }

        let score = valid.len();
        let accuracy = truncated_percent(valid.len(), guesses.len());
        let skill = truncated_percent(guessed.len(), reachable.len());
        let missed = reachable.difference(&guessed).cloned().collect();

        Self {
            valid,
            invalid,
            score,
            accuracy,
            guessed,
            missed,
            skill,
        }
    }

    /// Total number of guesses scored
    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Integer percentage, truncated toward zero; 0 when the denominator is 0
fn truncated_percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        0
    } else {
        (numerator * 100 / denominator) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    fn game_index() -> AnagramIndex {
        AnagramIndex::build(["rat", "mouse", "tar", "art", "chicken", "stop", "pots", "tops"])
    }

    fn game_budget() -> LetterBudget {
        LetterBudget::try_from_letters("potsria").unwrap()
    }

    #[test]
    fn scores_valid_pairs_once() {
        let guesses = [
            pair("star", "tarts"),
            pair("far", "rat"),
            pair("rat", "art"),
            pair("rat", "art"),
            pair("art", "rat"),
        ];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());

        assert_eq!(stats.valid, vec![pair("rat", "art")]);
        assert_eq!(stats.invalid.len(), 4);
        assert_eq!(stats.score, 1);
        // 1 valid of 5 guesses, truncated
        assert_eq!(stats.accuracy, 20);
        assert!(stats.guessed.contains("rat") && stats.guessed.contains("art"));
    }

    #[test]
    fn reversed_resubmission_counts_as_invalid() {
        let guesses = [pair("rat", "art"), pair("art", "rat")];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());
        assert_eq!(stats.score, 1);
        assert_eq!(stats.invalid, vec![pair("art", "rat")]);
    }

    #[test]
    fn cross_family_pairs_are_invalid() {
        // Both words reachable, but from different anagram families
        let guesses = [pair("rat", "pots")];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());
        assert_eq!(stats.score, 0);
        assert_eq!(stats.accuracy, 0);
    }

    #[test]
    fn empty_round_has_zero_percentages() {
        let stats = RoundStats::compute(&[], &game_budget(), &game_index());
        assert_eq!(stats.score, 0);
        assert_eq!(stats.accuracy, 0);
        assert_eq!(stats.skill, 0);
        assert!(stats.guessed.is_empty());
        // Everything reachable was missed
        assert!(stats.missed.contains("rat") && stats.missed.contains("tops"));
    }

    #[test]
    fn skill_counts_unique_words_against_reachable() {
        // Reachable under "potsria": rat/tar/art and pots/stop/tops
        let guesses = [pair("rat", "art"), pair("stop", "pots")];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());

        assert_eq!(stats.guessed.len(), 4);
        // 4 of 6 reachable words, truncated percent
        assert_eq!(stats.skill, 66);
        assert_eq!(
            stats.missed.iter().map(String::as_str).collect::<Vec<_>>(),
            ["tar", "tops"]
        );
    }

    #[test]
    fn accuracy_truncates_toward_zero() {
        // 3 valid of 8 guesses is 37.5 percent
        let guesses = [
            pair("rat", "art"),
            pair("rat", "tar"),
            pair("art", "tar"),
            pair("rat", "rat"),
            pair("far", "rat"),
            pair("mouse", "tops"),
            pair("star", "rats"),
            pair("pots", "rat"),
        ];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());
        assert_eq!(stats.valid.len(), 3);
        assert_eq!(stats.accuracy, 37);
    }

    #[test]
    fn mixed_case_guesses_are_normalized() {
        let guesses = [pair("Stop", "POTS")];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());
        assert_eq!(stats.valid, vec![pair("stop", "pots")]);
    }

    #[test]
    fn total_guesses_sums_both_buckets() {
        let guesses = [pair("rat", "art"), pair("rat", "art"), pair("x", "y")];
        let stats = RoundStats::compute(&guesses, &game_budget(), &game_index());
        assert_eq!(stats.total_guesses(), 3);
    }
}
