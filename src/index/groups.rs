//! Anagram index construction
//!
//! Builds the immutable mapping from canonical key to the alphabetized list
//! of corpus words sharing that key.

use crate::core::AnagramKey;
use rustc_hash::{FxHashMap, FxHashSet};

/// Equivalence-class index over a word corpus, keyed by letter multiset
///
/// Groups preserve corpus duplicates (the same word twice appears twice in
/// its group) while the membership set is distinct. There is no mutation API
/// after [`build`](Self::build); thread-safety for concurrent readers is
/// structural.
pub struct AnagramIndex {
    groups: FxHashMap<AnagramKey, Vec<String>>,
    words: FxHashSet<String>,
}

impl AnagramIndex {
    /// Build the index from a corpus of words
    ///
    /// Words are lowercased on the way in; empty entries are skipped. Each
    /// group is alphabetized once after all insertions rather than re-sorted
    /// per insert, so building is O(W log W) across W corpus words.
    ///
    /// # Examples
    /// ```
    /// use anagame::index::AnagramIndex;
    ///
    /// let index = AnagramIndex::build(["rat", "tar", "art", "mouse"]);
    /// assert_eq!(index.group_of("rat"), &["art", "rat", "tar"]);
    /// assert_eq!(index.group_of("mouse"), &["mouse"]);
    /// ```
    pub fn build<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: FxHashMap<AnagramKey, Vec<String>> = FxHashMap::default();
        let mut words = FxHashSet::default();

        for word in corpus {
            let word = word.as_ref().to_ascii_lowercase();
            if word.is_empty() {
                continue;
            }
            groups
                .entry(AnagramKey::of(&word))
                .or_default()
                .push(word.clone());
            words.insert(word);
        }

        // Alphabetize each group once, after all insertions
        for members in groups.values_mut() {
            members.sort_unstable();
        }

        Self { groups, words }
    }

    /// Iterate all groups as (key, alphabetized members) pairs
    ///
    /// Iteration order is unspecified; queries that need determinism impose
    /// their own ordering.
    pub fn groups(&self) -> impl Iterator<Item = (&AnagramKey, &[String])> {
        self.groups.iter().map(|(key, members)| (key, members.as_slice()))
    }

    /// The alphabetized group containing `word`, empty if `word` is unknown
    #[must_use]
    pub fn group_of(&self, word: &str) -> &[String] {
        self.groups
            .get(&AnagramKey::of(word))
            .map_or(&[], Vec::as_slice)
    }

    /// Whether `word` is a corpus member (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    /// Iterate the distinct corpus words, in no particular order
    pub fn distinct_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words in the corpus
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of anagram groups (distinct canonical keys)
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the index was built from an empty corpus
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
