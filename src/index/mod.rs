//! Anagram index and query engine
//!
//! [`AnagramIndex`] groups a corpus into anagram equivalence classes keyed by
//! canonical letter-multiset identity. Built once, then read-only: the three
//! query operations (reachable anagram words, largest reachable family, pair
//! validation) never mutate it, so a shared `&AnagramIndex` is safe to query
//! from many threads at once.

mod groups;
mod pairs;
mod query;

pub use groups::AnagramIndex;
