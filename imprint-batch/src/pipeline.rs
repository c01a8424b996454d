//! Batch pipeline — compile once, resolve once, then render in order.
//!
//! Processing is single-threaded and sequential, strictly in resolver
//! order. The compiled template set is the only state shared across files;
//! each document's value tree and model live only for its own iteration.

use std::path::PathBuf;

use imprint_core::{model, FileSet};
use imprint_render::{RenderError, TemplateEngine};

use crate::error::BatchError;
use crate::outpath;
use crate::writer::{self, WriteOutcome};

/// Immutable invocation parameters for one batch run.
///
/// Built once by the caller and passed by reference into the pipeline —
/// never ambient state.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory the template name is resolved against.
    pub template_dir: PathBuf,
    /// Template file name, relative to `template_dir`.
    pub template_name: String,
    /// Base directory of the input file set.
    pub input_dir: PathBuf,
    /// Include globs, relative to `input_dir`; empty means `**/*.json`.
    pub includes: Vec<String>,
    /// Exclude globs, relative to `input_dir`.
    pub excludes: Vec<String>,
    /// Root the output tree is written under, mirroring input structure.
    pub output_dir: PathBuf,
    /// Output file extension, without the leading dot.
    pub output_extension: String,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// Summary of one fully successful batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// One entry per input file, in processing order.
    pub writes: Vec<WriteOutcome>,
}

/// Run one full batch: read → parse → convert → derive → render → write,
/// once per selected input file.
///
/// The template set is compiled exactly once and shared read-only across
/// files; the input file set is resolved once as an ordered snapshot; derived
/// output paths are validated for collisions before any rendering starts.
/// Any failure aborts the remaining batch — outputs already written stay on
/// disk (a failed invocation must be treated as a failed build step, not
/// patched over).
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let engine = TemplateEngine::new(&config.template_dir)?;
    if !engine.has_template(&config.template_name) {
        return Err(BatchError::Template(RenderError::TemplateNotFound {
            name: config.template_name.clone(),
        }));
    }
    tracing::info!(
        "template: {}",
        config.template_dir.join(&config.template_name).display()
    );

    let fileset = FileSet::new(&config.input_dir, &config.includes, &config.excludes)?;
    let inputs = fileset.resolve()?;
    outpath::check_collisions(&inputs, &config.output_extension)?;

    let mut writes = Vec::with_capacity(inputs.len());
    for relative in &inputs {
        let input_path = config.input_dir.join(relative);
        tracing::info!("input:    {}", input_path.display());

        let document = model::load_document(&input_path).map_err(|e| BatchError::Input {
            input: relative.clone(),
            source: e,
        })?;

        let output_path = config
            .output_dir
            .join(outpath::derive(relative, &config.output_extension));
        tracing::info!("output:   {}", output_path.display());

        let content = engine
            .render(&config.template_name, &document)
            .map_err(|e| BatchError::Render {
                input: relative.clone(),
                source: e,
            })?;

        writes.push(writer::write_output(&output_path, &content, config.dry_run)?);
    }

    Ok(BatchReport { writes })
}
