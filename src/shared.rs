// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thread-safe engine handle.
//!
//! Ingestion touches the trie and the inverted index together, so both sit
//! behind one lock. A reader holding the read guard sees either none or all of
//! an ingested document, never a term that is in the trie but not yet counted.
//!
//! # Usage
//!
//! ```ignore
//! let shared = SharedEngine::new();
//! let writer = shared.clone();
//! std::thread::spawn(move || writer.ingest("doc1", "some text"));
//! let hits = shared.search_exact("text");
//! ```

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::engine::Engine;
use crate::types::{IndexStats, Posting, QueryMode, QueryResults};

/// Cloneable handle to one engine: one writer or many readers at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<Engine>>,
}

impl From<Engine> for SharedEngine {
    fn from(engine: Engine) -> Self {
        SharedEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a document under the write lock.
    pub fn ingest(&self, doc_id: &str, text: &str) -> usize {
        self.inner.write().ingest(doc_id, text)
    }

    pub fn search_exact(&self, query: &str) -> Vec<Posting> {
        self.inner.read().search_exact(query)
    }

    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        self.inner.read().autocomplete(query)
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        self.inner.read().suggest(query, limit)
    }

    pub fn query(&self, mode: QueryMode, text: &str) -> QueryResults {
        self.inner.read().query(mode, text)
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Hold the read lock for several queries against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, Engine> {
        self.inner.read()
    }
}
