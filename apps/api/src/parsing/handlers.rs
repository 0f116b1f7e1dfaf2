//! Axum route handlers for the Resume API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{FileInfo, ResumeRecord};
use crate::parsing::{parse_batch, UploadedDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub file_name: String,
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub records: Vec<ResumeRecord>,
    pub successful: usize,
    pub total: usize,
    /// Uploaded files beyond the per-batch limit; not parsed.
    pub skipped: usize,
}

impl ParseResponse {
    fn new(records: Vec<ResumeRecord>, skipped: usize) -> Self {
        Self {
            successful: records.iter().filter(|r| r.is_ok()).count(),
            total: records.len(),
            skipped,
            records,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Multipart upload of PDF / DOCX files. Parses up to `MAX_FILES` of them and
/// appends the records (failures included) to the session collection.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let max_bytes = state.config.max_upload_mb * 1024 * 1024;
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload '{name}': {e}")))?;
        if bytes.len() > max_bytes {
            return Err(AppError::Validation(format!(
                "'{name}' exceeds the {} MB upload limit",
                state.config.max_upload_mb
            )));
        }
        documents.push(UploadedDocument { name, bytes });
    }

    if documents.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }

    let skipped = documents.len().saturating_sub(state.config.max_files);
    if skipped > 0 {
        warn!(
            "{} files uploaded, only the first {} will be parsed",
            documents.len(),
            state.config.max_files
        );
    }

    let records = parse_batch(Arc::clone(&state.parser), documents, state.config.max_files).await;
    state.store.extend(records.clone()).await;

    Ok(Json(ParseResponse::new(records, skipped)))
}

/// POST /api/v1/resumes/text
///
/// Parses text produced by an external reader. Reader failure sentinels
/// (e.g. "PDF error: ...") become failed records.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if request.file_name.trim().is_empty() {
        return Err(AppError::Validation("file_name cannot be empty".to_string()));
    }

    let file_info = FileInfo::new(request.file_name, request.raw_text.len() as u64);
    let record = state.parser.build_record(&request.raw_text, file_info);
    info!(
        "Parsed text upload '{}' ({} skills)",
        record.file_info.name, record.summary.total_skills_found
    );
    state.store.extend([record.clone()]).await;

    Ok(Json(ParseResponse::new(vec![record], 0)))
}

/// GET /api/v1/resumes
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<ResumeRecord>> {
    Json(state.store.snapshot().await)
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// DELETE /api/v1/resumes
pub async fn handle_clear(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.store.clear().await;
    info!("Cleared {removed} parsed resumes");
    Json(ClearResponse { removed })
}
