//! Gameplay collaborators
//!
//! Everything a round needs around the core engine: the letter lottery that
//! picks a fun set of tiles, the guess parser, and end-of-round statistics.
//! The interactive loop itself lives in the commands layer; nothing here
//! touches stdin or stdout.

pub mod generate;
pub mod guess;
pub mod stats;

pub use generate::{LetterDistribution, LotteryConfig, draw_letters, generate_letters};
pub use guess::parse_guess;
pub use stats::RoundStats;
