//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical test utilities from minidex::testing
pub use minidex::testing::{make_docs, make_engine, postings, seeded_engine};

// ============================================================================
// FIXTURES
// ============================================================================

/// Two-document corpus used by the reference scenario.
pub const SCENARIO_DOCS: &[(&str, &str)] = &[
    ("doc1", "C++ programming with DSA"),
    (
        "doc2",
        "Data Structures and Algorithms are essential for programming",
    ),
];

// ============================================================================
// STRATEGIES
// ============================================================================

/// Raw tokens: mixed case, digits and the punctuation normalization strips.
pub fn raw_token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+'.,!-]{1,8}").unwrap()
}

/// Document text: raw tokens joined by assorted whitespace.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (raw_token_strategy(), prop::sample::select(vec![" ", "  ", "\t", "\n"])),
        0..12,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(token, sep)| format!("{}{}", token, sep))
            .collect::<String>()
    })
}

/// Corpus of `(doc_id, text)` pairs. Ids are drawn from a small pool so the
/// same document is sometimes ingested more than once.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop::string::string_regex("doc[0-5]").unwrap(),
            text_strategy(),
        ),
        1..8,
    )
}

/// Short lowercase prefixes, likely to hit something in a generated corpus.
pub fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{0,3}").unwrap()
}

/// Ingest a generated corpus into a fresh engine.
pub fn engine_from(corpus: &[(String, String)]) -> minidex::Engine {
    let mut engine = minidex::Engine::new();
    for (id, text) in corpus {
        engine.ingest(id, text);
    }
    engine
}
