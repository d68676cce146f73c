//! Canonical anagram keys
//!
//! Two canonical forms identify a word's letter multiset: the sorted-letter
//! key ([`AnagramKey`]), which is collision-free by construction and keys the
//! anagram index, and the multiplicative prime product ([`prime_product`]),
//! which compares as a single integer and backs the fast pairwise anagram
//! test in [`same_letters`].

use std::fmt;

/// Fixed letter-to-prime mapping, `a` through `z`
///
/// The prime product of a word is collision-free across distinct letter
/// multisets only under the assumption that products of these primes never
/// coincide, which is not exhaustively proven but holds in practice for the
/// 26-letter alphabet at dictionary word lengths. The table is a process-wide
/// constant so keys are reproducible across builds.
pub const LETTER_PRIMES: [u128; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

// 101^19 < 2^128, so a 19-letter word cannot overflow the product.
const PRIME_PRODUCT_MAX_LEN: usize = 19;

/// Canonical identifier for a word's letter multiset
///
/// Holds the word's letters lowercased and sorted, so two words compare equal
/// iff they are letter-permutations of one another (ignoring case). Orders
/// and hashes like the underlying byte sequence, which makes it usable both
/// as a map key and for deterministic iteration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnagramKey {
    letters: Box<[u8]>,
}

impl AnagramKey {
    /// Build the canonical key for `word`
    ///
    /// Lowercases before keying, so callers never need to normalize case
    /// themselves. Characters outside `a-z` are skipped; validating them away
    /// is the corpus provider's job.
    ///
    /// # Examples
    /// ```
    /// use anagame::core::AnagramKey;
    ///
    /// assert_eq!(AnagramKey::of("Stop"), AnagramKey::of("pots"));
    /// assert_ne!(AnagramKey::of("stop"), AnagramKey::of("spot t"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<u8> = word
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_lowercase())
            .collect();
        letters.sort_unstable();
        Self {
            letters: letters.into_boxed_slice(),
        }
    }

    /// Number of letters in the keyed multiset
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the key holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate the key's letters in sorted order, with multiplicity
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.letters() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Multiplicative prime key for `word`
///
/// The product of [`LETTER_PRIMES`] entries for each letter, with
/// multiplicity, after lowercasing and skipping non-letters. Returns `None`
/// for words long enough that the `u128` product could overflow; callers fall
/// back to sorted-letter keys in that case.
#[must_use]
pub fn prime_product(word: &str) -> Option<u128> {
    let mut product: u128 = 1;
    let mut len = 0usize;
    for b in word.bytes().filter(u8::is_ascii_alphabetic) {
        len += 1;
        if len > PRIME_PRODUCT_MAX_LEN {
            return None;
        }
        product *= LETTER_PRIMES[(b.to_ascii_lowercase() - b'a') as usize];
    }
    Some(product)
}

/// Whether `a` and `b` are letter-permutations of each other, ignoring case
///
/// Uses the prime products when both words are short enough for an exact
/// product, and the sorted-letter keys otherwise.
#[must_use]
pub fn same_letters(a: &str, b: &str) -> bool {
    match (prime_product(a), prime_product(b)) {
        (Some(pa), Some(pb)) => pa == pb,
        _ => AnagramKey::of(a) == AnagramKey::of(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_order_invariant() {
        assert_eq!(AnagramKey::of("stop"), AnagramKey::of("pots"));
        assert_eq!(AnagramKey::of("stop"), AnagramKey::of("tops"));
    }

    #[test]
    fn key_is_case_insensitive() {
        assert_eq!(AnagramKey::of("Beast"), AnagramKey::of("baste"));
    }

    #[test]
    fn key_distinguishes_multisets() {
        assert_ne!(AnagramKey::of("rat"), AnagramKey::of("rats"));
        assert_ne!(AnagramKey::of("aab"), AnagramKey::of("abb"));
    }

    #[test]
    fn key_respects_multiplicity() {
        // "tool" has two o's, "tole" does not
        assert_ne!(AnagramKey::of("tool"), AnagramKey::of("tole"));
        assert_eq!(AnagramKey::of("tool"), AnagramKey::of("loot"));
    }

    #[test]
    fn key_display_is_sorted_letters() {
        assert_eq!(AnagramKey::of("blade").to_string(), "abdel");
    }

    #[test]
    fn empty_key() {
        let key = AnagramKey::of("");
        assert!(key.is_empty());
        assert_eq!(key.len(), 0);
    }

    #[test]
    fn prime_table_is_strictly_increasing() {
        for pair in LETTER_PRIMES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn prime_product_matches_known_values() {
        // a*b*e*d = 2*3*11*7
        assert_eq!(prime_product("abed"), Some(462));
        assert_eq!(prime_product("bade"), Some(462));
        assert_eq!(prime_product(""), Some(1));
    }

    #[test]
    fn prime_product_bails_on_long_words() {
        let long = "z".repeat(20);
        assert_eq!(prime_product(&long), None);
        // 19 z's is the largest exact product
        assert!(prime_product(&"z".repeat(19)).is_some());
    }

    #[test]
    fn same_letters_agrees_with_sorted_keys() {
        let words = [
            "abed", "bade", "bead", "abled", "baled", "blade", "rat", "tar", "art", "stop",
            "pots", "tops", "mouse",
        ];
        for a in words {
            for b in words {
                assert_eq!(
                    same_letters(a, b),
                    AnagramKey::of(a) == AnagramKey::of(b),
                    "strategies disagree on ({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn same_letters_falls_back_for_long_words() {
        let a = "ab".repeat(12);
        let b = "ba".repeat(12);
        assert!(same_letters(&a, &b));
        assert!(!same_letters(&a, &b[..b.len() - 2]));
    }
}
