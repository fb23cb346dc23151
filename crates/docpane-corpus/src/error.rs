//! Error types for corpus loading.

use std::path::PathBuf;

/// Errors surfaced while loading a documentation corpus.
///
/// Per-file read failures are logged and skipped instead of failing the whole
/// load; only an unreadable source directory or a malformed manifest aborts.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Source directory could not be read.
    #[error("failed to read documentation directory {path}")]
    Io {
        /// Directory that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file exists but does not parse.
    #[error("invalid manifest {path}")]
    Manifest {
        /// Manifest path.
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
