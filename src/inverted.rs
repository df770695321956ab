//! Inverted index: term → document → occurrence count.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSITIVE_COUNTS**: every stored count is >= 1; a term with no documents
//!    has no entry at all
//! 2. **MONOTONIC**: counts only grow. Re-ingesting a document accumulates
//! 3. **LOOKUP_SORTED**: `lookup` returns postings sorted by
//!    (count DESC, doc_id ASC)

use std::collections::HashMap;

use crate::types::{Posting, Term};

/// Per-term occurrence counts, keyed by document id.
#[derive(Debug, Clone, Default)]
pub struct PostingIndex {
    terms: HashMap<String, HashMap<String, usize>>,
}

impl PostingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `term` in `doc_id`.
    pub fn record(&mut self, term: &Term, doc_id: &str) {
        // INVARIANT: POSITIVE_COUNTS - entries are created by their first occurrence
        *self
            .terms
            .entry(term.as_str().to_string())
            .or_default()
            .entry(doc_id.to_string())
            .or_insert(0) += 1;
    }

    /// Documents containing `term`, most occurrences first.
    ///
    /// Equal counts are ordered by document id so the result is deterministic.
    /// An unknown term gives an empty vector.
    pub fn lookup(&self, term: &str) -> Vec<Posting> {
        let Some(docs) = self.terms.get(term) else {
            return Vec::new();
        };

        let mut postings: Vec<Posting> = docs
            .iter()
            .map(|(doc_id, &count)| Posting::new(doc_id.as_str(), count))
            .collect();

        // INVARIANT: LOOKUP_SORTED
        postings.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.doc_id.cmp(&b.doc_id)));
        postings
    }

    /// Occurrences of `term` in `doc_id` (0 if none).
    pub fn count(&self, term: &str, doc_id: &str) -> usize {
        self.terms
            .get(term)
            .and_then(|docs| docs.get(doc_id))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, HashMap::len)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Indexed terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.keys().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total (term, document) pairs.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(HashMap::len).sum()
    }
}
