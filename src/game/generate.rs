//! Letter lottery
//!
//! Draws the round's letter budget, either uniformly or from the standard
//! English tile bag, and retries until the draw offers enough anagram words
//! to be worth playing.

use crate::core::LetterBudget;
use crate::index::AnagramIndex;
use rand::Rng;

/// How letters are drawn for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterDistribution {
    /// Each tile drawn independently and uniformly over `a-z`, with
    /// replacement
    Uniform,
    /// Tiles drawn without replacement from the standard 98-tile English
    /// letter bag (blanks excluded)
    #[default]
    Scrabble,
}

impl LetterDistribution {
    /// Parse a distribution name, defaulting to the tile bag
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "uniform" => Self::Uniform,
            _ => Self::Scrabble,
        }
    }
}

/// Per-letter tile counts of the standard English letter bag, blanks excluded
const TILE_BAG: &[(char, usize)] = &[
    ('a', 9),
    ('b', 2),
    ('c', 2),
    ('d', 4),
    ('e', 12),
    ('f', 2),
    ('g', 3),
    ('h', 2),
    ('i', 9),
    ('j', 1),
    ('k', 1),
    ('l', 4),
    ('m', 2),
    ('n', 6),
    ('o', 8),
    ('p', 2),
    ('q', 1),
    ('r', 6),
    ('s', 4),
    ('t', 6),
    ('u', 4),
    ('v', 2),
    ('w', 2),
    ('x', 1),
    ('y', 2),
    ('z', 1),
];

/// Lottery parameters for a round
#[derive(Debug, Clone)]
pub struct LotteryConfig {
    /// Number of tiles to draw
    pub tiles: usize,
    /// Minimum number of reachable anagram words a draw must offer
    pub fun_factor: usize,
    /// Sampling distribution
    pub distribution: LetterDistribution,
    /// Redraw limit before settling for the best draw seen
    pub max_attempts: usize,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            tiles: 7,
            fun_factor: 20,
            distribution: LetterDistribution::default(),
            max_attempts: 10_000,
        }
    }
}

/// Draw one letter budget of `tiles` letters
pub fn draw_letters<R: Rng>(
    rng: &mut R,
    tiles: usize,
    distribution: LetterDistribution,
) -> LetterBudget {
    let mut budget = LetterBudget::new();
    match distribution {
        LetterDistribution::Uniform => {
            for _ in 0..tiles {
                budget.add(char::from(b'a' + rng.random_range(0..26u8)));
            }
        }
        LetterDistribution::Scrabble => {
            let mut bag: Vec<char> = TILE_BAG
                .iter()
                .flat_map(|&(ch, count)| std::iter::repeat_n(ch, count))
                .collect();
            for _ in 0..tiles.min(bag.len()) {
                let picked = rng.random_range(0..bag.len());
                budget.add(bag.swap_remove(picked));
            }
        }
    }
    budget
}

/// Draw a budget that offers at least `fun_factor` reachable anagram words
///
/// Redraws until the fun threshold is met. Unreachable thresholds degrade
/// instead of spinning forever: after `max_attempts` draws the best draw seen
/// is returned.
pub fn generate_letters<R: Rng>(
    rng: &mut R,
    index: &AnagramIndex,
    config: &LotteryConfig,
) -> LetterBudget {
    let mut best: Option<(usize, LetterBudget)> = None;
    for _ in 0..config.max_attempts {
        let draw = draw_letters(rng, config.tiles, config.distribution);
        let offered = index.reachable_anagram_words(&draw).len();
        if offered >= config.fun_factor {
            return draw;
        }
        if best.as_ref().is_none_or(|&(most, _)| offered > most) {
            best = Some((offered, draw));
        }
    }
    best.map(|(_, draw)| draw).unwrap_or_default()
}
