//! Command implementations

pub mod bench;
pub mod check;
pub mod explore;
pub mod letters;
pub mod play;

pub use bench::{BenchResult, run_bench};
pub use check::{CheckReport, PairFailure, check_pair};
pub use explore::{ExploreReport, explore};
pub use letters::{LettersReport, roll_letters};
pub use play::{PlayConfig, run_play};
