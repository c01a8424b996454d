//! Error types for imprint-batch.
//!
//! Four distinguishable failure kinds: setup/configuration errors
//! ([`BatchError::FileSet`], [`BatchError::Template`],
//! [`BatchError::OutputCollision`]), input errors ([`BatchError::Input`]),
//! rendering errors ([`BatchError::Render`]), and output I/O
//! ([`BatchError::Io`]). Every failure aborts the whole invocation; there is
//! no partial-batch success.

use std::path::PathBuf;

use thiserror::Error;

use imprint_core::CoreError;
use imprint_render::RenderError;

/// All errors that can arise from a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// File-set configuration or resolution failed before any rendering.
    #[error("file-set error: {0}")]
    FileSet(#[from] CoreError),

    /// The template set could not be loaded or compiled, or the named
    /// template is absent. No input file has been processed.
    #[error("template error: {0}")]
    Template(#[from] RenderError),

    /// Reading or parsing one input document failed; the batch aborts here.
    #[error("input {input}: {source}")]
    Input {
        input: PathBuf,
        #[source]
        source: CoreError,
    },

    /// Rendering one input document failed (template/data mismatch); the
    /// batch aborts here.
    #[error("render failed for input {input}: {source}")]
    Render {
        input: PathBuf,
        #[source]
        source: RenderError,
    },

    /// Two distinct inputs derive the same output path; detected upfront so
    /// neither silently overwrites the other.
    #[error("inputs {first} and {second} both map to output {output}")]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// An I/O error while writing an output file, with annotated path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`BatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BatchError {
    BatchError::Io {
        path: path.into(),
        source,
    }
}
