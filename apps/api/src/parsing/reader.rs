//! Document reader: turns PDF / DOCX files into raw text.
//!
//! Failures are values: `ReadError` renders as the textual sentinel that a
//! record's `error` field carries, and `is_read_failure` recognises those
//! sentinels in text handed over by an external producer.

use std::path::Path;

use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild,
    TableCellContent, TableChild, TableRowChild,
};
use pdf_extract::OutputError;
use thiserror::Error;
use tracing::warn;

const SENTINEL_PREFIXES: &[&str] = &["PDF error:", "DOCX error:", "File not found!", "Unsupported"];

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReadError {
    #[error("File not found!")]
    FileNotFound,

    #[error("Unsupported file type!")]
    UnsupportedFileType,

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX error: {0}")]
    Docx(String),
}

impl ReadError {
    /// Error for a decoder that died without returning, attributed by file name.
    pub fn decoder_failure(file_name: &str, message: impl Into<String>) -> Self {
        match DocumentKind::from_name(file_name) {
            Some(DocumentKind::Pdf) => Self::Pdf(message.into()),
            Some(DocumentKind::Docx) => Self::Docx(message.into()),
            None => Self::UnsupportedFileType,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// True when `text` is a reader failure sentinel rather than document content.
pub fn is_read_failure(text: &str) -> bool {
    SENTINEL_PREFIXES.iter().any(|p| text.starts_with(p))
}

/// Reads a resume from disk, dispatching on the file extension.
pub fn read_resume(path: &Path) -> Result<String, ReadError> {
    if !path.exists() {
        return Err(ReadError::FileNotFound);
    }
    let name = path.to_string_lossy();
    let result = match DocumentKind::from_name(&name) {
        Some(DocumentKind::Pdf) => {
            pdf_extract::extract_text(path).map_err(pdf_error)
        }
        Some(DocumentKind::Docx) => std::fs::read(path)
            .map_err(|e| ReadError::Docx(e.to_string()))
            .and_then(|bytes| docx_text(&bytes)),
        None => Err(ReadError::UnsupportedFileType),
    };
    if let Err(e) = &result {
        warn!("Failed to read '{}': {e}", path.display());
    }
    result
}

/// Reads an in-memory upload. `file_name` only selects the decoder.
pub fn read_resume_bytes(file_name: &str, bytes: &[u8]) -> Result<String, ReadError> {
    let result = match DocumentKind::from_name(file_name) {
        Some(DocumentKind::Pdf) => {
            pdf_extract::extract_text_from_mem(bytes).map_err(pdf_error)
        }
        Some(DocumentKind::Docx) => docx_text(bytes),
        None => Err(ReadError::UnsupportedFileType),
    };
    if let Err(e) = &result {
        warn!("Failed to read upload '{file_name}': {e}");
    }
    result
}

/// `OutputError::PdfError` already renders with a "PDF error:" prefix.
fn pdf_error(err: OutputError) -> ReadError {
    match err {
        OutputError::PdfError(e) => ReadError::Pdf(e.to_string()),
        other => ReadError::Pdf(other.to_string()),
    }
}

/// Non-blank paragraphs joined by newlines, then each table row appended as
/// one space-separated run of cell text.
fn docx_text(bytes: &[u8]) -> Result<String, ReadError> {
    let docx = read_docx(bytes).map_err(|e| ReadError::Docx(format!("{e:?}")))?;

    let mut paragraphs = Vec::new();
    let mut table_rows = Vec::new();

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => {
                let text = paragraph_text(para);
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
            DocumentChild::Table(table) => {
                for row in &table.rows {
                    #[allow(irrefutable_let_patterns)]
                    let TableChild::TableRow(row) = row else {
                        continue;
                    };
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .filter_map(|cell| match cell {
                            TableRowChild::TableCell(cell) => Some(cell_text(&cell.children)),
                            #[allow(unreachable_patterns)]
                            _ => None,
                        })
                        .collect();
                    table_rows.push(cells.join(" "));
                }
            }
            _ => {}
        }
    }

    let mut text = paragraphs.join("\n");
    for row in table_rows {
        text.push(' ');
        text.push_str(&row);
    }
    Ok(text)
}

fn cell_text(contents: &[TableCellContent]) -> String {
    contents
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_paragraph_children(&para.children, &mut out);
    out
}

/// Runs are read directly; hyperlinks and tracked insertions are descended
/// into so auto-linked emails and URLs keep their text.
fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for ic in &insert.children {
                    if let InsertChild::Run(run) = ic {
                        push_run(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}
