//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::{seed_documents, Document};
use crate::engine::Engine;
use crate::types::Posting;

/// Build an engine from `(id, text)` pairs, ingested in order.
pub fn make_engine(docs: &[(&str, &str)]) -> Engine {
    let mut engine = Engine::new();
    for (id, text) in docs {
        engine.ingest(id, text);
    }
    engine
}

/// Engine loaded with the three demo documents.
pub fn seeded_engine() -> Engine {
    Engine::from_documents(&seed_documents())
}

/// Build documents from `(id, text)` pairs.
pub fn make_docs(docs: &[(&str, &str)]) -> Vec<Document> {
    docs.iter().map(|(id, text)| Document::new(*id, *text)).collect()
}

/// Build the expected lookup result from `(id, count)` pairs.
pub fn postings(expected: &[(&str, usize)]) -> Vec<Posting> {
    expected
        .iter()
        .map(|(id, count)| Posting::new(*id, *count))
        .collect()
}
