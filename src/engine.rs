//! Engine: trie + inverted index behind two entry points.
//!
//! # Architecture
//!
//! ```text
//! ingest(doc, text)                    query(mode, text)
//!       │                                     │
//!       ▼                                     ▼
//!   tokenize ─▶ normalize              normalize
//!       │                                     │
//!       ├──▶ PrefixIndex.insert(term)         ├── Exact ──▶ PostingIndex.lookup
//!       └──▶ PostingIndex.record(term, doc)   └── Prefix ─▶ PrefixIndex.enumerate
//! ```
//!
//! Every token goes into both structures, so the trie's vocabulary and the
//! inverted index's keys are always the same set.
//!
//! # Complexity
//!
//! | Operation     | Time                      |
//! |---------------|---------------------------|
//! | Ingest        | O(text length)            |
//! | Exact lookup  | O(1) + O(d log d) sort    |
//! | Autocomplete  | O(p) + O(output size)     |
//!
//! Where d = documents containing the term, p = prefix length.

use std::collections::BTreeSet;

use crate::contracts::{
    check_completions_sorted, check_lookup_sorted, check_term_indexed,
    check_vocabulary_agreement,
};
use crate::corpus::Document;
use crate::inverted::PostingIndex;
use crate::trie::PrefixIndex;
use crate::types::{IndexStats, Posting, QueryMode, QueryResults};
use crate::utils::{normalize, tokenize};

/// An in-memory search index over a set of documents.
///
/// Each `Engine` owns its indexes outright; any number can coexist.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    prefix: PrefixIndex,
    postings: PostingIndex,
    documents: BTreeSet<String>,
    tokens: usize,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine and ingest every document in order.
    pub fn from_documents<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut engine = Self::new();
        for doc in documents {
            engine.ingest_document(doc);
        }
        engine.check_invariants();
        engine
    }

    /// Index `text` under `doc_id`. Returns the number of tokens indexed.
    ///
    /// Text is split on whitespace and each token normalized; tokens that
    /// normalize to nothing are skipped. Ingesting the same id again adds to
    /// its existing counts rather than replacing them.
    pub fn ingest(&mut self, doc_id: &str, text: &str) -> usize {
        if !self.documents.contains(doc_id) {
            self.documents.insert(doc_id.to_string());
        }

        let mut indexed = 0;
        for term in tokenize(text) {
            // INVARIANT: VOCABULARY_AGREEMENT
            self.prefix.insert(&term);
            self.postings.record(&term, doc_id);
            check_term_indexed(&self.prefix, &self.postings, term.as_str());
            indexed += 1;
        }
        self.tokens += indexed;

        indexed
    }

    pub fn ingest_document(&mut self, doc: &Document) -> usize {
        self.ingest(&doc.id, &doc.text)
    }

    /// Documents containing the normalized query term, most occurrences first.
    ///
    /// Ties are broken by document id. A query that normalizes to nothing, or
    /// a term never seen, gives an empty vector.
    pub fn search_exact(&self, query: &str) -> Vec<Posting> {
        let results = self.postings.lookup(&normalize(query));
        check_lookup_sorted(&results);
        results
    }

    /// Every indexed term starting with the normalized query, in lexicographic
    /// order. An empty query lists the whole vocabulary.
    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        let prefix = normalize(query);
        let results = self.prefix.enumerate(&prefix);
        check_completions_sorted(&prefix, &results);
        results
    }

    /// The first `limit` results of [`autocomplete`](Self::autocomplete),
    /// without walking the rest of the subtree.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        self.prefix.completions(&normalize(query)).take(limit).collect()
    }

    /// Single entry point for both query modes.
    pub fn query(&self, mode: QueryMode, text: &str) -> QueryResults {
        match mode {
            QueryMode::Exact => QueryResults::Exact(self.search_exact(text)),
            QueryMode::Prefix => QueryResults::Prefix(self.autocomplete(text)),
        }
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            terms: self.prefix.len(),
            postings: self.postings.posting_count(),
            trie_nodes: self.prefix.node_count(),
            tokens: self.tokens,
        }
    }

    /// Whether `doc_id` has been ingested (even if it contributed no terms).
    pub fn contains_document(&self, doc_id: &str) -> bool {
        self.documents.contains(doc_id)
    }

    /// Ingested document ids, ascending.
    pub fn document_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.iter().map(String::as_str)
    }

    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix
    }

    pub fn posting_index(&self) -> &PostingIndex {
        &self.postings
    }

    /// Check the whole vocabulary agrees across both indexes. Walks every
    /// term; `ingest` only checks the terms it touches. No-op in release builds.
    pub fn check_invariants(&self) {
        check_vocabulary_agreement(&self.prefix, &self.postings);
    }
}
