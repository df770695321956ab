use serde::{Deserialize, Serialize};

/// A document to ingest: caller-chosen id plus raw text.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The three documents the interactive demo starts with.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document::new("doc1.txt", "C++ programming with DSA and algorithms"),
        Document::new(
            "doc2.txt",
            "Data Structures and Algorithms are essential for programming",
        ),
        Document::new("doc3.txt", "Programming in C++ is fun and powerful"),
    ]
}
