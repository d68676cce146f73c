//! Guess parsing
//!
//! Splits raw player input into a word pair. The format is exactly two
//! comma-separated fields; whitespace anywhere is tolerated and stripped.

/// Parse a raw guess line into a word pair
///
/// Returns `None` for anything other than two non-empty comma-separated
/// fields; downstream pair validation rejects `None` naturally.
///
/// # Examples
/// ```
/// use anagame::game::parse_guess;
///
/// assert_eq!(parse_guess("eat, tea"), Some(("eat".into(), "tea".into())));
/// assert_eq!(parse_guess("eat,tea"), Some(("eat".into(), "tea".into())));
/// assert_eq!(parse_guess("eat tea"), None);
/// ```
#[must_use]
pub fn parse_guess(raw: &str) -> Option<(String, String)> {
    let cleaned: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut fields = cleaned.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) if !first.is_empty() && !second.is_empty() => {
            Some((first.to_string(), second.to_string()))
        }
        _ => None,
    }
}
