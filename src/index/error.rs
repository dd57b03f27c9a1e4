//! Error types for index accumulation and emission.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors arising from building or writing an index file.
#[derive(Debug, Error)]
pub enum IndexError {
    /// No output directory was supplied, or it was blank.
    #[error("missing required output directory for index file")]
    MissingOutputDirectory,

    /// Creating `META-INF`, opening the index file, or writing to it failed.
    #[error("failed to write index file {path}: {source}")]
    Write {
        /// Absolute path of the index file that could not be written.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Return `true` when the error reflects caller misuse rather than I/O.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingOutputDirectory)
    }
}

/// Result type alias using [`IndexError`].
pub type Result<T> = std::result::Result<T, IndexError>;
