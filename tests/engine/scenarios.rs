//! Reference scenarios: small corpora with hand-checked answers.

use minidex::{Engine, QueryMode, QueryResults};

use crate::common::{make_engine, postings, seeded_engine, SCENARIO_DOCS};

#[test]
fn test_exact_programming_in_both_docs() {
    let engine = make_engine(SCENARIO_DOCS);
    assert_eq!(
        engine.search_exact("programming"),
        postings(&[("doc1", 1), ("doc2", 1)])
    );
}

#[test]
fn test_prefix_prog() {
    let engine = make_engine(SCENARIO_DOCS);
    assert_eq!(engine.autocomplete("prog"), vec!["programming"]);
}

#[test]
fn test_missing_term_and_prefix() {
    let engine = make_engine(SCENARIO_DOCS);
    assert!(engine.search_exact("missing").is_empty());
    assert!(engine.autocomplete("zz").is_empty());
}

#[test]
fn test_repeated_term_counts() {
    let engine = make_engine(&[("docA", "cat cat dog")]);
    assert_eq!(engine.search_exact("cat"), postings(&[("docA", 2)]));
    assert_eq!(engine.search_exact("dog"), postings(&[("docA", 1)]));
}

#[test]
fn test_punctuation_is_glued_not_split() {
    let engine = make_engine(&[("doc", "don't C++ e-mail")]);
    assert_eq!(engine.search_exact("dont"), postings(&[("doc", 1)]));
    assert_eq!(engine.search_exact("c"), postings(&[("doc", 1)]));
    assert_eq!(engine.search_exact("email"), postings(&[("doc", 1)]));
    // The query is normalized the same way
    assert_eq!(engine.search_exact("DON'T"), postings(&[("doc", 1)]));
    assert!(engine.search_exact("mail").is_empty());
}

#[test]
fn test_reingest_accumulates_counts() {
    let mut engine = make_engine(&[("docA", "cat dog")]);
    engine.ingest("docA", "cat cat");
    assert_eq!(engine.search_exact("cat"), postings(&[("docA", 3)]));
    assert_eq!(engine.search_exact("dog"), postings(&[("docA", 1)]));
}

#[test]
fn test_query_entry_point() {
    let engine = make_engine(SCENARIO_DOCS);

    let exact = engine.query(QueryMode::Exact, "Algorithms");
    assert_eq!(exact, QueryResults::Exact(postings(&[("doc2", 1)])));

    let prefix = engine.query(QueryMode::Prefix, "D");
    assert_eq!(
        prefix,
        QueryResults::Prefix(vec!["data".to_string(), "dsa".to_string()])
    );
}

#[test]
fn test_seeded_demo_vocabulary() {
    let engine = seeded_engine();
    assert_eq!(
        engine.autocomplete(""),
        vec![
            "algorithms",
            "and",
            "are",
            "c",
            "data",
            "dsa",
            "essential",
            "for",
            "fun",
            "in",
            "is",
            "powerful",
            "programming",
            "structures",
            "with",
        ]
    );

    let stats = engine.stats();
    assert_eq!(stats.documents, 3);
    assert_eq!(stats.terms, 15);
    assert_eq!(stats.tokens, 6 + 8 + 7);
}

#[test]
fn test_empty_engine() {
    let engine = Engine::new();
    assert!(engine.search_exact("anything").is_empty());
    assert!(engine.autocomplete("").is_empty());
    assert_eq!(engine.stats().trie_nodes, 1);
}

#[test]
fn test_ingestion_order_does_not_matter() {
    let forward = make_engine(&[("a", "x y z"), ("b", "y z"), ("a", "z")]);
    let backward = make_engine(&[("a", "z"), ("b", "z y"), ("a", "z y x")]);

    for term in ["x", "y", "z"] {
        assert_eq!(forward.search_exact(term), backward.search_exact(term));
    }
    assert_eq!(forward.autocomplete(""), backward.autocomplete(""));
    assert_eq!(forward.stats(), backward.stats());
}
