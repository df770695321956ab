//! Utility functions for string processing.

use crate::types::Term;

/// Normalize a string for indexing and querying: keep alphanumeric characters,
/// lowercase them, drop everything else.
///
/// Nothing is substituted for the dropped characters, so punctuation inside a
/// token glues its halves together:
/// - "C++" → "c"
/// - "don't" → "dont"
/// - "Data-Structures" → "datastructures"
///
/// Every index lookup and every ingested token goes through this one routine,
/// so the trie and the inverted index always agree on term identity.
///
/// # Algorithm
///
/// 1. Drop non-alphanumeric characters
/// 2. Apply the full Unicode lowercase mapping
/// 3. Drop anything the mapping produced that is not alphanumeric
///    (e.g. the combining dot of "İ" → "i̇")
///
/// Step 3 keeps the function idempotent: `normalize(normalize(s)) == normalize(s)`.
/// The output is a fixed point of lowercasing, though not free of uppercase
/// letters: one with no lowercase mapping ('ϒ') is kept unchanged.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Split text on whitespace and normalize each raw token.
///
/// Tokens that normalize to the empty string ("--", "&", "...") are skipped.
pub fn tokenize(text: &str) -> impl Iterator<Item = Term> + '_ {
    text.split_whitespace().filter_map(Term::new)
}
