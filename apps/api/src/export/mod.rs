//! Export: tabular (CSV) and structured (JSON) snapshots of the collection.
//!
//! Files are named `<base>_<YYYYmmdd_HHMMSS>.<ext>` and written through a
//! temporary file in the target directory, so a failed export leaves nothing
//! behind. Existing files are never replaced: a name already taken within the
//! same second gets a `_1`, `_2`, ... suffix.

pub mod csv_export;
pub mod handlers;
pub mod json_export;

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No results to export")]
    NothingToExport,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not persist export file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    pub exported: usize,
    pub failed: usize,
}

fn timestamped_path(
    dir: &Path,
    base: &str,
    ext: &str,
    now: DateTime<Local>,
    n: usize,
) -> PathBuf {
    let stamp = now.format("%Y%m%d_%H%M%S");
    match n {
        0 => dir.join(format!("{base}_{stamp}.{ext}")),
        n => dir.join(format!("{base}_{stamp}_{n}.{ext}")),
    }
}

/// Writes `contents` via `write` into a temp file, then links it into place
/// under the first free timestamped name.
fn write_atomically<F>(dir: &Path, base: &str, ext: &str, write: F) -> Result<PathBuf, ExportError>
where
    F: FnOnce(&mut NamedTempFile) -> Result<(), ExportError>,
{
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    write(&mut tmp)?;
    tmp.flush()?;

    let now = Local::now();
    let mut n = 0;
    loop {
        let path = timestamped_path(dir, base, ext, now, n);
        match tmp.persist_noclobber(&path) {
            Ok(_) => return Ok(path),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                tmp = e.file;
                n += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
