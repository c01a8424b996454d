//! Error types for imprint-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from input loading and file-set resolution.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure (file not found, permission denied, etc.),
    /// with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on an input document — includes file path and
    /// line/column context from serde_json.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input document's root is not a JSON object. Templates are
    /// evaluated against named fields, so a bare array/scalar root has no
    /// usable shape.
    #[error("document root must be a JSON object: {path}")]
    NonObjectRoot { path: PathBuf },

    /// An include/exclude glob failed to compile.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
