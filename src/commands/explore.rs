//! Letter exploration command
//!
//! Answers "what could I play with these tiles": every reachable anagram
//! word plus the largest reachable family.

use crate::core::LetterBudget;
use crate::index::AnagramIndex;

/// Result of exploring a letter budget
pub struct ExploreReport {
    pub budget: LetterBudget,
    /// Reachable anagram words, sorted for display
    pub reachable: Vec<String>,
    /// Representative of the largest reachable family, if any group fits
    pub largest_family: Option<String>,
    /// Members of that representative's group
    pub family_members: Vec<String>,
}

/// Explore which anagram words a budget can reach
#[must_use]
pub fn explore(index: &AnagramIndex, budget: &LetterBudget) -> ExploreReport {
    let mut reachable: Vec<String> = index
        .reachable_anagram_words(budget)
        .into_iter()
        .map(str::to_string)
        .collect();
    reachable.sort_unstable();

    let largest_family = index.largest_reachable_group(budget).map(str::to_string);
    let family_members = largest_family
        .as_deref()
        .map(|word| index.group_of(word).to_vec())
        .unwrap_or_default();

    ExploreReport {
        budget: budget.clone(),
        reachable,
        largest_family,
        family_members,
    }
}
