//! # imprint-core
//!
//! Data model, JSON conversion, and file-set resolution for the imprint
//! batch renderer.
//!
//! Public API surface:
//! - [`model`] — [`ModelValue`] tagged union and JSON conversion
//! - [`fileset`] — [`FileSet`] include/exclude resolution
//! - [`error`] — [`CoreError`]

pub mod error;
pub mod fileset;
pub mod model;

pub use error::CoreError;
pub use fileset::FileSet;
pub use model::{convert, load_document, ModelValue};
