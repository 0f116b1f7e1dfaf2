// Resume parsing pipeline.
// raw text -> normalize -> {contact, skills, sections} -> ResumeRecord.
// Every stage below the reader is a pure function of one document's text.

pub mod builder;
pub mod contact;
pub mod handlers;
pub mod normalize;
pub mod reader;
pub mod sections;
pub mod skills;

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info};

use crate::models::resume::{FileInfo, ResumeRecord};
use crate::parsing::builder::ResumeParser;
use crate::parsing::reader::{read_resume, read_resume_bytes, ReadError};

/// One uploaded file, as received.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Bytes,
}

/// Parses up to `max_files` documents, one blocking task per document.
/// Records come back in input order.
pub async fn parse_batch(
    parser: Arc<ResumeParser>,
    documents: Vec<UploadedDocument>,
    max_files: usize,
) -> Vec<ResumeRecord> {
    let total = documents.len();
    let tasks: Vec<_> = documents
        .into_iter()
        .take(max_files)
        .map(|doc| {
            let parser = Arc::clone(&parser);
            let name = doc.name.clone();
            let handle = tokio::task::spawn_blocking(move || {
                let file_info = FileInfo::new(doc.name.as_str(), doc.bytes.len() as u64);
                let read = read_resume_bytes(&doc.name, &doc.bytes);
                parser.build_from_read(read, file_info)
            });
            (name, handle)
        })
        .collect();

    let mut records = Vec::with_capacity(tasks.len());
    for (name, handle) in tasks {
        let record = match handle.await {
            Ok(record) => record,
            Err(e) => {
                error!("Decoder task for '{name}' failed: {e}");
                ResumeRecord::failed(
                    FileInfo::new(name.as_str(), 0),
                    ReadError::decoder_failure(&name, e.to_string()).to_string(),
                )
            }
        };
        records.push(record);
    }

    let successful = records.iter().filter(|r| r.is_ok()).count();
    info!(
        "Parsed {} of {} uploaded files: {} successful, {} failed",
        records.len(),
        total,
        successful,
        records.len() - successful
    );
    records
}

/// Parses files straight from disk, sequentially.
pub fn parse_paths<P: AsRef<Path>>(parser: &ResumeParser, paths: &[P]) -> Vec<ResumeRecord> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            parser.build_from_read(read_resume(path), FileInfo::new(name, size))
        })
        .collect()
}
