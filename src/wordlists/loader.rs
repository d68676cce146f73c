//! Word list loading utilities
//!
//! Corpus-provider duties live here: case normalization and non-letter
//! filtering happen on load, so the engine downstream only ever sees
//! lowercase `a-z` words.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize one corpus entry
///
/// Lowercases and accepts only non-empty, all-ASCII-letter words; anything
/// else is dropped by the loaders.
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_lowercase();
    (!word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())).then_some(word)
}

/// Load a corpus from a file, one word per line
///
/// Blank lines and entries containing non-letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_word).collect())
}

/// Convert an embedded string slice to an owned corpus
///
/// # Examples
/// ```
/// use anagame::wordlists::WORDS;
/// use anagame::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_word(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_word("Rat"), Some("rat".to_string()));
        assert_eq!(normalize_word("  tar \n"), Some("tar".to_string()));
    }

    #[test]
    fn normalize_drops_non_letter_entries() {
        assert_eq!(normalize_word("ca7"), None);
        assert_eq!(normalize_word("it's"), None);
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word("   "), None);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["rat", "Tar", "art"];
        let words = words_from_slice(input);
        assert_eq!(words, ["rat", "tar", "art"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["rat", "no-good", "", "tar"];
        let words = words_from_slice(input);
        assert_eq!(words, ["rat", "tar"]);
    }

    #[test]
    fn load_from_embedded_corpus() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
