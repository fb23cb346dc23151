//! Corpus loading from a documentation directory.
//!
//! Scans a directory for markdown sources and builds the ordered record list
//! the viewer works from. Dotfiles and `_`-prefixed partials are skipped.
//! A file that cannot be read is logged and dropped; only an unreadable
//! directory or a broken manifest fails the load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docpane_renderer::{MarkdownRenderer, slugify};

use crate::error::CorpusError;
use crate::manifest::Manifest;
use crate::record::{Corpus, DocRecord};

/// Loads a [`Corpus`] from a source directory.
pub struct CorpusLoader {
    source_dir: PathBuf,
}

impl CorpusLoader {
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Scan the source directory and build the corpus.
    ///
    /// Display order: entries with an explicit order (manifest override or a
    /// numeric `NN-` filename prefix) sort first by that key, the rest follow
    /// alphabetically. Title precedence: manifest override, then first H1,
    /// then filename-derived.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] when the source directory exists but
    /// cannot be read, and [`CorpusError::Manifest`] for a malformed
    /// `docs.toml`. A missing directory yields an empty corpus.
    pub fn load(&self) -> Result<Corpus, CorpusError> {
        let manifest = Manifest::load(&self.source_dir)?;

        let entries = match fs::read_dir(&self.source_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.source_dir.display(),
                    "Documentation directory missing, corpus is empty"
                );
                return Ok(Corpus::default());
            }
            Err(source) => {
                return Err(CorpusError::Io {
                    path: self.source_dir.clone(),
                    source,
                });
            }
        };

        let mut scanned = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !is_markdown(&path) {
                continue;
            }
            let Some(filename) = path.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            if filename.starts_with('.') || filename.starts_with('_') {
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable document"
                    );
                    continue;
                }
            };

            scanned.push(build_doc(filename, content, manifest.as_ref()));
        }

        if let Some(manifest) = &manifest {
            for name in manifest.filenames() {
                if !scanned.iter().any(|d| d.filename == name) {
                    tracing::warn!(filename = %name, "Manifest names a missing document");
                }
            }
        }

        // Explicitly ordered entries first, then alphabetical.
        scanned.sort_by(|a, b| {
            let a_key = a.explicit_order.unwrap_or(u32::MAX);
            let b_key = b.explicit_order.unwrap_or(u32::MAX);
            a_key.cmp(&b_key).then_with(|| a.filename.cmp(&b.filename))
        });

        let records = scanned
            .into_iter()
            .enumerate()
            .map(|(idx, doc)| DocRecord {
                id: slugify(doc.stem()),
                title: doc.title,
                filename: doc.filename,
                content: doc.content,
                order: u32::try_from(idx).unwrap_or(u32::MAX),
            })
            .collect::<Vec<_>>();

        tracing::debug!(document_count = records.len(), "Corpus scan completed");

        Ok(Corpus::new(records))
    }

}

fn build_doc(filename: String, content: String, manifest: Option<&Manifest>) -> ScannedDoc {
    let entry = manifest.and_then(|m| m.entry(&filename));
    let stem = filename.trim_end_matches(".md");

    let explicit_order = entry
        .and_then(|e| e.order)
        .or_else(|| numeric_prefix(stem));

    let title = entry
        .and_then(|e| e.title.clone())
        .or_else(|| extract_h1_title(&content))
        .unwrap_or_else(|| title_from_stem(stem));

    ScannedDoc {
        filename,
        title,
        content,
        explicit_order,
    }
}

struct ScannedDoc {
    filename: String,
    title: String,
    content: String,
    explicit_order: Option<u32>,
}

impl ScannedDoc {
    fn stem(&self) -> &str {
        self.filename.trim_end_matches(".md")
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// First H1 text, via the renderer's title extraction.
fn extract_h1_title(content: &str) -> Option<String> {
    MarkdownRenderer::new()
        .with_title_extraction()
        .render_markdown(content)
        .title
        .filter(|t| !t.is_empty())
}

/// Parse a `NN-` filename prefix as a sort key.
fn numeric_prefix(stem: &str) -> Option<u32> {
    let (prefix, rest) = stem.split_once('-')?;
    if rest.is_empty() {
        return None;
    }
    prefix.parse().ok()
}

/// Derive a display title from a filename stem: strip the numeric prefix,
/// split on dashes and underscores, capitalize each word.
fn title_from_stem(stem: &str) -> String {
    let display = match stem.split_once('-') {
        Some((prefix, rest))
            if !prefix.is_empty()
                && !rest.is_empty()
                && prefix.chars().all(|c| c.is_ascii_digit()) =>
        {
            rest
        }
        _ => stem,
    };

    display
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
