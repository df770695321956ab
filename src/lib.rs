//! In-memory term search and prefix autocomplete.
//!
//! Two data structures do the work: a prefix tree over the vocabulary for
//! autocomplete, and an inverted index from term to per-document occurrence
//! counts for exact lookup. [`Engine`] keeps them in step.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│  engine.rs   │────▶│   trie.rs    │
//! │ (normalize, │     │   (Engine)   │     │ (PrefixIndex)│
//! │  tokenize)  │     │              │────▶│ inverted.rs  │
//! └─────────────┘     └──────────────┘     │(PostingIndex)│
//!                            │             └──────────────┘
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (vocabulary agreement, result ordering - debug)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use minidex::Engine;
//!
//! let mut engine = Engine::new();
//! engine.ingest("doc1", "C++ programming with DSA");
//! engine.ingest("doc2", "Data Structures and Algorithms are essential for programming");
//!
//! let hits = engine.search_exact("Programming");
//! assert_eq!(hits.len(), 2);
//! assert_eq!(engine.autocomplete("prog"), vec!["programming"]);
//! ```

// Module declarations
pub mod contracts;
pub mod corpus;
mod engine;
mod inverted;
#[cfg(feature = "sync")]
mod shared;
pub mod testing;
mod trie;
mod types;
mod utils;

// Re-exports for public API
pub use corpus::{load_documents, seed_documents, Document};
pub use engine::Engine;
pub use inverted::PostingIndex;
#[cfg(feature = "sync")]
pub use shared::SharedEngine;
pub use trie::{Completions, PrefixIndex};
pub use types::{IndexStats, Posting, QueryMode, QueryResults, Term};
pub use utils::{normalize, tokenize};
