//! Inverted index properties.
//!
//! - lookup(t) covers exactly the documents containing t
//! - Counts equal occurrence counts
//! - Results sorted by (count DESC, doc_id ASC)
//! - Every indexed term is also in the trie

use std::collections::BTreeSet;

use minidex::normalize;
use proptest::prelude::*;

use crate::common::{corpus_strategy, engine_from};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: lookup is sorted by count descending, doc id ascending on ties.
    #[test]
    fn prop_lookup_sorted(corpus in corpus_strategy()) {
        let engine = engine_from(&corpus);

        for term in engine.autocomplete("") {
            let hits = engine.search_exact(&term);
            for pair in hits.windows(2) {
                let (prev, curr) = (&pair[0], &pair[1]);
                prop_assert!(
                    prev.count > curr.count
                        || (prev.count == curr.count && prev.doc_id < curr.doc_id),
                    "Postings for '{}' out of order: {:?} before {:?}",
                    term, prev, curr
                );
            }
        }
    }

    /// Property: every ingested term is in the full enumeration and has postings.
    #[test]
    fn prop_ingested_terms_everywhere(corpus in corpus_strategy()) {
        let engine = engine_from(&corpus);
        let vocabulary: BTreeSet<String> = engine.autocomplete("").into_iter().collect();

        for (doc_id, text) in &corpus {
            for raw in text.split_whitespace() {
                let term = normalize(raw);
                if term.is_empty() {
                    continue;
                }
                prop_assert!(vocabulary.contains(&term), "'{}' missing from trie", term);
                prop_assert!(
                    engine.search_exact(&term).iter().any(|p| &p.doc_id == doc_id),
                    "'{}' has no posting for {}", term, doc_id
                );
            }
        }
    }

    /// Property: trie vocabulary and inverted index keys are the same set.
    #[test]
    fn prop_vocabularies_agree(corpus in corpus_strategy()) {
        let engine = engine_from(&corpus);
        let trie: BTreeSet<String> = engine.autocomplete("").into_iter().collect();
        let inverted: BTreeSet<String> =
            engine.posting_index().terms().map(str::to_string).collect();
        prop_assert_eq!(trie, inverted);
    }

    /// Property: re-ingesting a document adds its occurrences on top.
    #[test]
    fn prop_reingest_accumulates(corpus in corpus_strategy()) {
        let mut engine = engine_from(&corpus);
        let (doc_id, text) = &corpus[0];
        let before: Vec<(String, usize)> = engine
            .autocomplete("")
            .into_iter()
            .map(|t| {
                let count = engine.posting_index().count(&t, doc_id);
                (t, count)
            })
            .collect();

        engine.ingest(doc_id, text);

        for (term, count_before) in before {
            let added = text
                .split_whitespace()
                .filter(|raw| normalize(raw) == term)
                .count();
            prop_assert_eq!(
                engine.posting_index().count(&term, doc_id),
                count_before + added
            );
        }
    }
}
