//! Hash-gated atomic output writing.
//!
//! A real write goes to `<path>.imprint.tmp` and is renamed onto the final
//! path, so a failure mid-write never leaves a partial output file. Content
//! identical to what is already on disk (by SHA-256) is skipped entirely, so
//! re-running an unchanged batch touches nothing.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, BatchError};

/// Outcome of writing one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File already holds identical content; nothing was touched.
    Unchanged { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteOutcome {
    /// The output path this outcome refers to.
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path }
            | WriteOutcome::Unchanged { path }
            | WriteOutcome::WouldWrite { path } => path,
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Write one rendered output, creating parent directories as needed.
pub(crate) fn write_output(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteOutcome, BatchError> {
    let digest = sha256_hex(content.as_bytes());

    if path.is_file() {
        let existing = std::fs::read(path).map_err(|e| io_err(path, e))?;
        if sha256_hex(&existing) == digest {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteOutcome::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteOutcome::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    // Idempotent: already-existing directories are not an error.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.imprint.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
    })
}
