//! Runtime contracts for the two indexes.
//!
//! Debug-mode assertions that check the properties the engine promises its
//! callers. They compile to nothing in release builds (`debug_assert!`) and
//! fail loudly during development and tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                        |
//! |--------------------------------|-------------------------------------------------|
//! | `check_vocabulary_agreement`   | trie terminals == inverted index keys           |
//! | `check_term_indexed`           | one term is in both indexes                     |
//! | `check_lookup_sorted`          | postings sorted by (count DESC, doc_id ASC)     |
//! | `check_completions_sorted`     | completions strictly ascending, prefix-bounded  |
//!
//! # Usage
//!
//! ```ignore
//! use minidex::contracts::*;
//!
//! // In debug builds, this panics if the indexes disagree
//! check_vocabulary_agreement(engine.prefix_index(), engine.posting_index());
//! ```

use crate::inverted::PostingIndex;
use crate::trie::PrefixIndex;
use crate::types::Posting;

// ============================================================================
// VOCABULARY CONTRACTS
// ============================================================================

/// Check that both indexes hold the same set of terms.
///
/// Ingestion inserts every term into both structures and nothing is ever
/// removed, so the trie's terminal set and the inverted index's key set must
/// be identical. Equal sizes plus one-way inclusion is enough.
///
/// # Panics (debug builds only)
/// Panics if the sizes differ or an indexed term is missing from the trie.
#[inline]
pub fn check_vocabulary_agreement(prefix: &PrefixIndex, postings: &PostingIndex) {
    debug_assert_eq!(
        prefix.len(),
        postings.len(),
        "Contract violation: vocabulary_agreement - \
         trie holds {} terms, inverted index holds {}",
        prefix.len(),
        postings.len()
    );

    if cfg!(debug_assertions) {
        for term in postings.terms() {
            debug_assert!(
                prefix.contains(term),
                "Contract violation: vocabulary_agreement - \
                 '{}' is indexed but missing from the trie",
                term
            );
        }
    }
}

/// Check that a just-ingested term reached both indexes.
///
/// The per-token form of [`check_vocabulary_agreement`]: costs one trie walk
/// and one map lookup, so it can run on every ingested token.
#[inline]
pub fn check_term_indexed(prefix: &PrefixIndex, postings: &PostingIndex, term: &str) {
    debug_assert!(
        prefix.contains(term) && postings.contains(term),
        "Contract violation: term_indexed - '{}' (trie: {}, inverted index: {})",
        term,
        prefix.contains(term),
        postings.contains(term)
    );
}

// ============================================================================
// RESULT ORDER CONTRACTS
// ============================================================================

/// Check that exact-lookup results are ranked.
///
/// ```text
/// ∀ i. count[i] > count[i+1] ∨ (count[i] = count[i+1] ∧ doc_id[i] < doc_id[i+1])
/// ```
#[inline]
pub fn check_lookup_sorted(postings: &[Posting]) {
    for pair in postings.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        debug_assert!(
            prev.count > curr.count || (prev.count == curr.count && prev.doc_id < curr.doc_id),
            "Contract violation: lookup_sorted - \
             ({}, {}) must not precede ({}, {})",
            prev.doc_id,
            prev.count,
            curr.doc_id,
            curr.count
        );
    }
}

/// Check that completions are strictly ascending and all extend `prefix`.
#[inline]
pub fn check_completions_sorted(prefix: &str, terms: &[String]) {
    for pair in terms.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: completions_sorted - '{}' must not precede '{}'",
            pair[0],
            pair[1]
        );
    }
    for term in terms {
        debug_assert!(
            term.starts_with(prefix),
            "Contract violation: completions_prefix_bounded - '{}' does not start with '{}'",
            term,
            prefix
        );
    }
}
