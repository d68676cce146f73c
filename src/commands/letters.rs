//! Letter rolling command
//!
//! Rolls a round's tiles without playing, showing what the draw offers.

use crate::core::LetterBudget;
use crate::game::{LotteryConfig, generate_letters};
use crate::index::AnagramIndex;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of rolling a letter draw
pub struct LettersReport {
    pub budget: LetterBudget,
    /// How many anagram words the draw offers
    pub offered: usize,
    /// Representative of the largest reachable family
    pub largest_family: Option<String>,
}

/// Roll tiles with the lottery and summarize what they offer
#[must_use]
pub fn roll_letters(index: &AnagramIndex, config: &LotteryConfig, seed: u64) -> LettersReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let budget = generate_letters(&mut rng, index, config);
    let offered = index.reachable_anagram_words(&budget).len();
    let largest_family = index.largest_reachable_group(&budget).map(str::to_string);

    LettersReport {
        budget,
        offered,
        largest_family,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_meets_fun_factor() {
        let index = AnagramIndex::build(["rat", "tar", "art", "stop", "pots", "tops"]);
        let config = LotteryConfig {
            fun_factor: 2,
            ..LotteryConfig::default()
        };
        let report = roll_letters(&index, &config, 42);
        assert!(report.offered >= 2);
        assert!(report.largest_family.is_some());
    }

    #[test]
    fn roll_is_reproducible_for_a_seed() {
        let index = AnagramIndex::build(["rat", "tar", "art"]);
        let config = LotteryConfig {
            fun_factor: 2,
            ..LotteryConfig::default()
        };
        let a = roll_letters(&index, &config, 9);
        let b = roll_letters(&index, &config, 9);
        assert_eq!(a.budget, b.budget);
        assert_eq!(a.offered, b.offered);
    }
}
