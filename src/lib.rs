//! Anagame
//!
//! An anagram word-game engine: groups a corpus into anagram equivalence
//! classes and answers letter-constrained queries about which words can form
//! anagram pairs with a given set of tiles.
//!
//! # Quick Start
//!
//! ```rust
//! use anagame::core::LetterBudget;
//! use anagame::index::AnagramIndex;
//!
//! let index = AnagramIndex::build(["rat", "tar", "art", "mouse"]);
//! let budget = LetterBudget::try_from_letters("potsria").unwrap();
//!
//! let reachable = index.reachable_anagram_words(&budget);
//! assert!(reachable.contains("rat") && reachable.contains("tar"));
//! assert!(index.is_valid_pair("rat", "tar", &budget));
//! ```

// Core domain types
pub mod core;

// Anagram index and query engine
pub mod index;

// Gameplay collaborators: letter lottery, guess parsing, round statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
