//! Optional corpus manifest with per-file title and order overrides.
//!
//! A `docs.toml` in the corpus directory can pin display order or override
//! titles without touching the markdown sources:
//!
//! ```toml
//! [[docs]]
//! filename = "setup.md"
//! title = "Setup Guide"
//! order = 1
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CorpusError;

/// Manifest filename looked up in the corpus directory.
pub const MANIFEST_FILENAME: &str = "docs.toml";

/// Parsed `docs.toml` contents.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    docs: Vec<ManifestEntry>,
}

/// Overrides for one corpus file.
#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    /// Corpus filename the entry applies to.
    pub filename: String,
    /// Display title override.
    #[serde(default)]
    pub title: Option<String>,
    /// Sort key override; entries with an explicit order sort first.
    #[serde(default)]
    pub order: Option<u32>,
}

impl Manifest {
    /// Load the manifest from a corpus directory.
    ///
    /// Returns `Ok(None)` when no manifest file exists.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Manifest`] when the file exists but does not
    /// parse as TOML.
    pub fn load(dir: &Path) -> Result<Option<Self>, CorpusError> {
        let path = dir.join(MANIFEST_FILENAME);
        let Ok(text) = fs::read_to_string(&path) else {
            return Ok(None);
        };
        let manifest = toml::from_str(&text).map_err(|source| CorpusError::Manifest {
            path,
            source,
        })?;
        Ok(Some(manifest))
    }

    /// Look up the entry for a corpus filename.
    #[must_use]
    pub fn entry(&self, filename: &str) -> Option<&ManifestEntry> {
        self.docs.iter().find(|e| e.filename == filename)
    }

    /// All filenames named by the manifest.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|e| e.filename.as_str())
    }
}
