//! Exact-lookup ranking: count descending, document id ascending on ties.

use crate::common::{make_engine, postings};

#[test]
fn test_higher_frequency_ranks_first() {
    let engine = make_engine(&[
        ("low", "rust"),
        ("high", "rust rust rust"),
        ("mid", "Rust, RUST"),
    ]);
    assert_eq!(
        engine.search_exact("rust"),
        postings(&[("high", 3), ("mid", 2), ("low", 1)])
    );
}

#[test]
fn test_ties_ordered_by_doc_id() {
    let engine = make_engine(&[("doc3.txt", "and"), ("doc1.txt", "and"), ("doc2.txt", "and")]);
    let ids: Vec<String> = engine
        .search_exact("and")
        .into_iter()
        .map(|p| p.doc_id)
        .collect();
    assert_eq!(ids, vec!["doc1.txt", "doc2.txt", "doc3.txt"]);
}

#[test]
fn test_ranking_is_stable_across_calls() {
    let engine = make_engine(&[("b", "x x"), ("a", "x x"), ("c", "x"), ("d", "x x x")]);
    let first = engine.search_exact("x");
    for _ in 0..10 {
        assert_eq!(engine.search_exact("x"), first);
    }
    assert_eq!(first, postings(&[("d", 3), ("a", 2), ("b", 2), ("c", 1)]));
}

#[test]
fn test_reingest_can_change_rank() {
    let mut engine = make_engine(&[("a", "term term"), ("b", "term")]);
    assert_eq!(engine.search_exact("term")[0].doc_id, "a");

    engine.ingest("b", "term term");
    assert_eq!(engine.search_exact("term"), postings(&[("b", 3), ("a", 2)]));
}
