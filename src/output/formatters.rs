//! Formatting utilities for terminal output

use crate::core::LetterBudget;

/// Format a budget's tiles as spaced uppercase letters
#[must_use]
pub fn format_tiles(budget: &LetterBudget) -> String {
    let mut result = String::with_capacity(budget.total() as usize * 2);
    for ch in budget.letters() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push(ch.to_ascii_uppercase());
    }
    result
}

/// Format word pairs as `word1,word2` entries separated by double spaces
#[must_use]
pub fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(first, second)| format!("{first},{second}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Wrap words into indented lines of `per_line` entries
#[must_use]
pub fn format_word_lines<'a, I>(words: I, per_line: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    words
        .chunks(per_line.max(1))
        .map(|chunk| format!("  {}", chunk.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_uppercased_and_spaced() {
        let budget = LetterBudget::try_from_letters("tra").unwrap();
        assert_eq!(format_tiles(&budget), "A R T");
    }

    #[test]
    fn tiles_of_empty_budget() {
        assert_eq!(format_tiles(&LetterBudget::new()), "");
    }

    #[test]
    fn pairs_join_with_double_spaces() {
        let pairs = vec![
            ("rat".to_string(), "art".to_string()),
            ("stop".to_string(), "pots".to_string()),
        ];
        assert_eq!(format_pairs(&pairs), "rat,art  stop,pots");
        assert_eq!(format_pairs(&[]), "");
    }

    #[test]
    fn word_lines_wrap_and_indent() {
        let words = ["art", "pots", "rat", "stop", "tar"];
        let formatted = format_word_lines(words, 2);
        assert_eq!(formatted, "  art pots\n  rat stop\n  tar");
    }

    #[test]
    fn word_lines_tolerate_zero_width() {
        let formatted = format_word_lines(["rat"], 0);
        assert_eq!(formatted, "  rat");
    }
}
