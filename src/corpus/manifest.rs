use anyhow::{bail, Result};
use serde::Deserialize;

/// Manifest format version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json`: which files in a directory make up the corpus.
///
/// Each entry is a path relative to the manifest's directory and doubles as
/// the document id.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
}

impl InputManifest {
    pub fn validate(&self) -> Result<()> {
        if self.version != MANIFEST_VERSION {
            bail!(
                "Unsupported manifest version: {} (expected {})",
                self.version,
                MANIFEST_VERSION
            );
        }
        if let Some(entry) = self.documents.iter().find(|d| d.trim().is_empty()) {
            bail!("Manifest contains an empty document entry: {:?}", entry);
        }
        Ok(())
    }
}
