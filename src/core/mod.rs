//! Core domain types for the anagram engine
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod key;
mod letters;

pub use key::{AnagramKey, LETTER_PRIMES, prime_product, same_letters};
pub use letters::{ALPHABET_LEN, LetterBudget, LetterError};
