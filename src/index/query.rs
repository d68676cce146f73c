//! Letter-constrained queries over the anagram index
//!
//! A group is *reachable* when its canonical key can be assembled from the
//! round's letter budget, each key letter consuming one tile. Both queries
//! here re-derive a fresh scratch budget per group, so concurrent callers
//! never interfere.

use super::groups::AnagramIndex;
use crate::core::{AnagramKey, LetterBudget};
use rustc_hash::FxHashSet;

impl AnagramIndex {
    /// All corpus words that are reachable and can form at least one anagram
    /// pair
    ///
    /// A reachable group contributes its members only when it is
    /// anagram-capable: at least two distinct members, each at least three
    /// letters long. The result is an unordered set; sort it for display.
    ///
    /// # Examples
    /// ```
    /// use anagame::core::LetterBudget;
    /// use anagame::index::AnagramIndex;
    ///
    /// let index = AnagramIndex::build(["abed", "mouse", "bead", "baled", "abled", "rat", "blade"]);
    /// let reachable = index.reachable_anagram_words(&LetterBudget::unrestricted());
    ///
    /// let mut words: Vec<&str> = reachable.into_iter().collect();
    /// words.sort_unstable();
    /// assert_eq!(words, ["abed", "abled", "baled", "bead", "blade"]);
    /// ```
    #[must_use]
    pub fn reachable_anagram_words(&self, budget: &LetterBudget) -> FxHashSet<&str> {
        let mut result = FxHashSet::default();
        for (key, members) in self.groups() {
            if is_anagram_capable(members) && key_fits(key, budget) {
                result.extend(members.iter().map(String::as_str));
            }
        }
        result
    }

    /// A representative word from the largest reachable anagram group
    ///
    /// The representative is the group's alphabetically-first member; group
    /// size counts distinct members. Ties between equally-sized groups go to
    /// the alphabetically-lowest representative, so the result is
    /// deterministic regardless of map iteration order. Returns `None` when
    /// no group's key fits the budget.
    #[must_use]
    pub fn largest_reachable_group(&self, budget: &LetterBudget) -> Option<&str> {
        let mut best: Option<(usize, &str)> = None;
        for (key, members) in self.groups() {
            if !key_fits(key, budget) {
                continue;
            }
            let size = distinct_members(members);
            // Invariant from build: groups are non-empty and alphabetized
            let Some(representative) = members.first() else {
                continue;
            };
            let candidate = (size, representative.as_str());
            best = match best {
                Some((best_size, best_rep))
                    if best_size > size || (best_size == size && best_rep < candidate.1) =>
                {
                    Some((best_size, best_rep))
                }
                _ => Some(candidate),
            };
        }
        best.map(|(_, representative)| representative)
    }
}

/// Whether the key's letters all fit within `budget`, with multiplicity
///
/// Consumes a scratch copy progressively: a letter the key needs twice must
/// be present twice in the budget.
fn key_fits(key: &AnagramKey, budget: &LetterBudget) -> bool {
    let mut scratch = budget.clone();
    key.letters().all(|ch| scratch.try_take(ch))
}

/// Whether a group can produce an anagram pair
///
/// Needs at least two distinct members, each of length >= 3. Members of one
/// group are letter-permutations of each other, so checking the first
/// member's length covers all of them.
fn is_anagram_capable(members: &[String]) -> bool {
    members.first().is_some_and(|w| w.len() >= 3) && distinct_members(members) >= 2
}

/// Count distinct members of an alphabetized group
fn distinct_members(members: &[String]) -> usize {
    if members.is_empty() {
        return 0;
    }
    1 + members.windows(2).filter(|pair| pair[0] != pair[1]).count()
}
