//! Differential tests against a naive oracle.
//!
//! The oracle recomputes everything from the raw corpus with plain maps and
//! linear scans. The engine must agree with it on every query.

use std::collections::{BTreeMap, BTreeSet};

use minidex::{normalize, Posting};
use proptest::prelude::*;

use crate::common::{corpus_strategy, engine_from, prefix_strategy, raw_token_strategy};

// =============================================================================
// ORACLE IMPLEMENTATION
// =============================================================================

struct Oracle {
    /// term -> doc_id -> count
    counts: BTreeMap<String, BTreeMap<String, usize>>,
}

impl Oracle {
    fn build(corpus: &[(String, String)]) -> Self {
        let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for (doc_id, text) in corpus {
            for raw in text.split_whitespace() {
                let term = normalize(raw);
                if !term.is_empty() {
                    *counts
                        .entry(term)
                        .or_default()
                        .entry(doc_id.clone())
                        .or_default() += 1;
                }
            }
        }
        Oracle { counts }
    }

    fn lookup(&self, query: &str) -> Vec<Posting> {
        let mut hits: Vec<Posting> = self
            .counts
            .get(&normalize(query))
            .map(|docs| {
                docs.iter()
                    .map(|(doc, count)| Posting::new(doc.as_str(), *count))
                    .collect()
            })
            .unwrap_or_default();
        hits.sort_by_key(|p| (std::cmp::Reverse(p.count), p.doc_id.clone()));
        hits
    }

    fn complete(&self, query: &str) -> Vec<String> {
        let prefix = normalize(query);
        self.counts
            .keys()
            .filter(|t| t.starts_with(prefix.as_str()))
            .cloned()
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: exact lookup agrees with the oracle for indexed and random queries.
    #[test]
    fn prop_exact_matches_oracle(corpus in corpus_strategy(), probe in raw_token_strategy()) {
        let engine = engine_from(&corpus);
        let oracle = Oracle::build(&corpus);

        for term in oracle.counts.keys() {
            prop_assert_eq!(engine.search_exact(term), oracle.lookup(term));
        }
        prop_assert_eq!(engine.search_exact(&probe), oracle.lookup(&probe));
    }

    /// Property: autocomplete agrees with the oracle.
    #[test]
    fn prop_prefix_matches_oracle(corpus in corpus_strategy(), prefix in prefix_strategy()) {
        let engine = engine_from(&corpus);
        let oracle = Oracle::build(&corpus);
        prop_assert_eq!(engine.autocomplete(&prefix), oracle.complete(&prefix));
    }

    /// Property: stats agree with the oracle's counts.
    #[test]
    fn prop_stats_match_oracle(corpus in corpus_strategy()) {
        let engine = engine_from(&corpus);
        let oracle = Oracle::build(&corpus);
        let stats = engine.stats();

        let docs: BTreeSet<&String> = corpus.iter().map(|(id, _)| id).collect();
        prop_assert_eq!(stats.documents, docs.len());
        prop_assert_eq!(stats.terms, oracle.counts.len());
        prop_assert_eq!(
            stats.postings,
            oracle.counts.values().map(BTreeMap::len).sum::<usize>()
        );
        prop_assert_eq!(
            stats.tokens,
            oracle.counts.values().flat_map(BTreeMap::values).sum::<usize>()
        );
    }
}
