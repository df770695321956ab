//! Getting documents into the engine.
//!
//! The engine itself only sees `(id, text)` pairs. This module turns paths on
//! disk into those pairs:
//!
//! | Input                           | Documents                                  |
//! |---------------------------------|--------------------------------------------|
//! | `corpus.json`                   | JSON array of `{"id", "text"}`             |
//! | directory with `manifest.json`  | listed files, id = entry as written        |
//! | other directory                 | every `*.txt` file, sorted, id = file name |
//! | any other file                  | that file, id = file name                  |

pub mod document;
pub mod manifest;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use document::*;
pub use manifest::*;

/// Name of the manifest file looked for inside an input directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Load documents from a file or directory.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    if path.is_dir() {
        let manifest_path = path.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            load_manifest_dir(path, &manifest_path)
        } else {
            load_text_dir(path)
        }
    } else if path.extension().is_some_and(|ext| ext == "json") {
        load_json_file(path)
    } else {
        Ok(vec![read_text_document(path)?])
    }
}

fn load_json_file(path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn load_manifest_dir(dir: &Path, manifest_path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read manifest {}", manifest_path.display()))?;
    let manifest: InputManifest = serde_json::from_str(&content)
        .with_context(|| format!("Invalid manifest JSON in {}", manifest_path.display()))?;
    manifest
        .validate()
        .with_context(|| format!("Invalid manifest {}", manifest_path.display()))?;

    manifest
        .documents
        .iter()
        .map(|entry| {
            let path = dir.join(entry);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Document::new(entry.as_str(), text))
        })
        .collect()
}

fn load_text_dir(dir: &Path) -> Result<Vec<Document>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    // Sort by file name to keep ingestion order stable across platforms
    paths.sort();

    paths.iter().map(|p| read_text_document(p)).collect()
}

fn read_text_document(path: &Path) -> Result<Document> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(id, text))
}
