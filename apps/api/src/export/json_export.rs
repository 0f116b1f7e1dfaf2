use std::path::Path;

use tracing::info;

use crate::export::{write_atomically, ExportError, ExportReport};
use crate::models::resume::ResumeRecord;

/// Pretty-printed array of every record, failures included.
pub fn export_json(
    records: &[ResumeRecord],
    dir: &Path,
    base: &str,
) -> Result<ExportReport, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let path = write_atomically(dir, base, "json", |file| {
        serde_json::to_writer_pretty(file, records)?;
        Ok(())
    })?;

    let failed = records.iter().filter(|r| !r.is_ok()).count();
    info!("JSON saved: {} ({} records)", path.display(), records.len());
    Ok(ExportReport {
        path,
        exported: records.len(),
        failed,
    })
}
