//! Thread-safe handle: readers never see half an ingestion.

use std::thread;

use minidex::SharedEngine;

#[test]
fn test_readers_see_consistent_vocabulary() {
    let shared = SharedEngine::new();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..100 {
                shared.ingest(&format!("doc{}", i), &format!("word{} common", i));
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let engine = shared.read();
                    let vocabulary = engine.autocomplete("");
                    assert_eq!(vocabulary.len(), engine.posting_index().len());
                    for term in &vocabulary {
                        assert!(!engine.search_exact(term).is_empty(), "{} not counted", term);
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let stats = shared.stats();
    assert_eq!(stats.documents, 100);
    assert_eq!(stats.terms, 101);
    assert_eq!(shared.search_exact("common").len(), 100);
    assert_eq!(shared.suggest("word9", 3), vec!["word9", "word90", "word91"]);
}
