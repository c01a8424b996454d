//! # imprint-batch
//!
//! Output path derivation, hash-gated atomic writing, and batch
//! orchestration for the imprint renderer.
//!
//! Call [`run_batch`] with a [`BatchConfig`] to compile the template set
//! once, resolve the input file set once, and render/write every selected
//! document in order. Any failure aborts the remaining batch.

pub mod error;
pub mod outpath;
pub mod pipeline;
pub mod writer;

pub use error::BatchError;
pub use pipeline::{run_batch, BatchConfig, BatchReport};
pub use writer::WriteOutcome;
