// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the index.
//!
//! Terms go in, postings and completions come out. The types here are small on
//! purpose: a `Term` is a string that has been through `normalize`, a `Posting`
//! is a document id with a count, and `QueryResults` is whichever of the two
//! sequences a query mode asks for.
//!
//! # Invariants
//!
//! - **Term**: non-empty and `normalize(term) == term`. The only constructor is
//!   `Term::new`, which normalizes, so an un-normalized term cannot exist.
//!
//! - **Posting**: `count >= 1`. A document that never contained the term has
//!   no posting, not a zero-count one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::normalize;

// =============================================================================
// TERMS
// =============================================================================

/// A normalized token: alphanumeric, already lowercased, never empty.
///
/// "Lowercased" means lowercasing again changes nothing. Letters with no
/// lowercase mapping, such as 'ϒ', are kept as they are.
///
/// Two raw tokens are the same term iff their normalized forms are byte-equal,
/// so `Term` derives its equality and ordering straight from the string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Normalize a raw token. Returns `None` when nothing alphanumeric survives.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Term(normalized))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One document's share of an exact-term lookup.
///
/// Lookup results are ordered by `count` descending, then `doc_id` ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Caller-supplied document identifier
    pub doc_id: String,
    /// Occurrences of the term in this document (always >= 1)
    pub count: usize,
}

impl Posting {
    pub fn new(doc_id: impl Into<String>, count: usize) -> Self {
        Posting {
            doc_id: doc_id.into(),
            count,
        }
    }
}

/// Which index a query is answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Exact term, answered by the inverted index
    Exact,
    /// Term prefix, answered by the trie
    Prefix,
}

/// Results of `Engine::query`, tagged by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "results", rename_all = "lowercase")]
pub enum QueryResults {
    /// `(doc_id, count)` pairs, count descending
    Exact(Vec<Posting>),
    /// Matching terms, lexicographic
    Prefix(Vec<String>),
}

impl QueryResults {
    pub fn mode(&self) -> QueryMode {
        match self {
            QueryResults::Exact(_) => QueryMode::Exact,
            QueryResults::Prefix(_) => QueryMode::Prefix,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QueryResults::Exact(postings) => postings.len(),
            QueryResults::Prefix(terms) => terms.len(),
        }
    }

    /// "No results" / "no suggestions" - a normal outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Size of an engine's indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Distinct document ids ingested
    pub documents: usize,
    /// Distinct terms (trie terminals == inverted index keys)
    pub terms: usize,
    /// (term, document) pairs in the inverted index
    pub postings: usize,
    /// Trie nodes, root included
    pub trie_nodes: usize,
    /// Non-empty tokens indexed, counting repeats
    pub tokens: usize,
}
