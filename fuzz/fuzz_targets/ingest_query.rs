// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ingestion followed by queries.
//!
//! Builds an engine from arbitrary documents, then checks exact lookup and
//! autocomplete against the ordering and agreement guarantees.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use minidex::{normalize, Engine};

#[derive(Arbitrary, Debug)]
struct Input {
    docs: Vec<(u8, String)>,
    query: String,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let mut engine = Engine::new();
    for (id, text) in input.docs.iter().take(16) {
        // Cap text length to avoid timeout
        let text: String = text.chars().take(4096).collect();
        engine.ingest(&format!("doc{}", id % 8), &text);
    }

    // INVARIANT 1: indexes agree after any ingestion sequence
    engine.check_invariants();

    // INVARIANT 2: exact hits sorted by (count DESC, doc_id ASC), all positive
    let hits = engine.search_exact(&input.query);
    for pair in hits.windows(2) {
        assert!(
            (pair[0].count, &pair[1].doc_id) > (pair[1].count, &pair[0].doc_id),
            "unsorted hits: {:?}",
            hits
        );
    }
    assert!(hits.iter().all(|h| h.count > 0));

    // INVARIANT 3: completions ascending, prefix-bounded, and suggest is a prefix of them
    let prefix = normalize(&input.query);
    let terms = engine.autocomplete(&input.query);
    assert!(terms.windows(2).all(|w| w[0] < w[1]), "unsorted terms: {:?}", terms);
    assert!(terms.iter().all(|t| t.starts_with(&prefix)));

    let limit = usize::from(input.limit);
    let suggested = engine.suggest(&input.query, limit);
    assert_eq!(&suggested[..], &terms[..limit.min(terms.len())]);

    // INVARIANT 4: every hit's term is in the vocabulary
    if !hits.is_empty() {
        assert!(terms.contains(&prefix));
    }
});
