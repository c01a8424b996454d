//! Error types for imprint-render.
//!
//! The variants keep configuration problems (a template that cannot be
//! located or compiled) apart from template-content problems (a render that
//! fails against a particular document), so the orchestrator can report them
//! differently.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Filesystem error while reading the template directory.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template directory does not exist or is not a directory.
    #[error("template directory not found: {path}")]
    DirNotFound { path: PathBuf },

    /// A loaded template failed to compile (syntax error, bad include).
    #[error("template compilation failed: {0}")]
    Compile(#[source] tera::Error),

    /// The named template is not among the compiled set.
    #[error("template '{name}' not found in template directory")]
    TemplateNotFound { name: String },

    /// The data model could not be turned into a render context.
    #[error("context serialization failed: {0}")]
    Context(#[source] tera::Error),

    /// The engine raised an error while evaluating the template against one
    /// document (undefined variable, type mismatch in an expression).
    #[error("template '{template}' failed to render: {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}
