//! imprint — batch-render a Tera template over a set of JSON documents.
//!
//! # Usage
//!
//! ```text
//! imprint --template report.txt.tera \
//!         --input-dir models [--include <glob>]... [--exclude <glob>]... \
//!         --output-dir generated --output-ext txt \
//!         [--template-dir templates] [--dry-run]
//! ```
//!
//! One output file is written per selected input, mirroring the input set's
//! relative directory layout under the output root. Any failure aborts the
//! whole invocation with a non-zero exit status.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use imprint_batch::{run_batch, BatchConfig, WriteOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "imprint",
    version,
    about = "Render a template once per JSON document in a file set",
    long_about = None,
)]
struct Cli {
    /// Directory the template name is resolved against.
    #[arg(long, default_value = "templates")]
    template_dir: PathBuf,

    /// Template file name, relative to --template-dir.
    #[arg(long = "template", value_name = "NAME")]
    template_name: String,

    /// Base directory of the JSON input file set.
    #[arg(long)]
    input_dir: PathBuf,

    /// Include glob, relative to --input-dir (repeatable; default: **/*.json).
    #[arg(long = "include", value_name = "GLOB")]
    includes: Vec<String>,

    /// Exclude glob, relative to --input-dir (repeatable).
    #[arg(long = "exclude", value_name = "GLOB")]
    excludes: Vec<String>,

    /// Root directory the output tree is written under.
    #[arg(long)]
    output_dir: PathBuf,

    /// Output file extension, without the leading dot.
    #[arg(long = "output-ext", value_name = "EXT")]
    output_extension: String,

    /// Show what would be written without writing any files.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = BatchConfig {
        template_dir: cli.template_dir,
        template_name: cli.template_name,
        input_dir: cli.input_dir,
        includes: cli.includes,
        excludes: cli.excludes,
        output_dir: cli.output_dir,
        output_extension: cli.output_extension,
        dry_run: cli.dry_run,
    };

    let report = run_batch(&config)
        .with_context(|| format!("batch render with template '{}' failed", config.template_name))?;
    print_report(&report.writes, config.dry_run);
    Ok(())
}

fn print_report(writes: &[WriteOutcome], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    if writes.is_empty() {
        println!("{prefix}{} no input files matched", "✓".green());
        return;
    }

    let written = writes
        .iter()
        .filter(|w| {
            matches!(
                w,
                WriteOutcome::Written { .. } | WriteOutcome::WouldWrite { .. }
            )
        })
        .count();
    let unchanged = writes.len() - written;

    println!(
        "{prefix}{} {} file(s) rendered ({written} written, {unchanged} unchanged)",
        "✓".green(),
        writes.len(),
    );
    for w in writes {
        match w {
            WriteOutcome::Written { path } => println!("  ✎  {}", path.display()),
            WriteOutcome::WouldWrite { path } => println!("  ~  {}", path.display()),
            WriteOutcome::Unchanged { path } => println!("  ·  {}", path.display()),
        }
    }
}
