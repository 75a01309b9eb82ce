//! Canonical key normalization.
//!
//! Every subject and object passes through [`canonicalize`] before it is
//! stored or used as a lookup key, so stored keys and query keys always
//! compare byte for byte.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is neither a word character nor whitespace.
#[expect(clippy::expect_used, reason = "literal pattern is known valid")]
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern compiles"));

/// Normalize text into a comparison-safe key: lowercase, strip
/// punctuation, trim surrounding whitespace. Internal whitespace is kept,
/// so multi-word keys stay multi-word.
///
/// Idempotent and infallible; may return an empty string.
#[must_use]
pub fn canonicalize(text: &str) -> String {
    PUNCTUATION
        .replace_all(&text.to_lowercase(), "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(canonicalize("The Tree!"), canonicalize("the tree"));
        assert_eq!(canonicalize("Yard."), "yard");
    }

    #[test]
    fn test_idempotent() {
        let once = canonicalize("  The, Tree! ");
        assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn test_internal_whitespace_kept() {
        assert_eq!(canonicalize("Big Tree"), "big tree");
    }

    #[test]
    fn test_pure_punctuation_becomes_empty() {
        assert_eq!(canonicalize("?!"), "");
    }
}
