//! Axum route handlers for CSV / JSON exports into `EXPORT_DIR`.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::export::csv_export::{export_analytics_csv, export_csv, export_search_csv};
use crate::export::json_export::export_json;
use crate::export::ExportReport;
use crate::search::analytics::compute_analytics;
use crate::search::handlers::SearchQuery;
use crate::search::skill_search::search_by_skill;
use crate::state::AppState;

/// POST /api/v1/resumes/export/csv
pub async fn handle_export_csv(
    State(state): State<AppState>,
) -> Result<Json<ExportReport>, AppError> {
    let records = state.store.snapshot().await;
    let dir = state.config.export_dir.clone();
    let report =
        tokio::task::spawn_blocking(move || export_csv(&records, &dir, "resume_results"))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(report))
}

/// POST /api/v1/resumes/export/json
pub async fn handle_export_json(
    State(state): State<AppState>,
) -> Result<Json<ExportReport>, AppError> {
    let records = state.store.snapshot().await;
    let dir = state.config.export_dir.clone();
    let report =
        tokio::task::spawn_blocking(move || export_json(&records, &dir, "parse_results"))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(report))
}

/// POST /api/v1/resumes/search/export?skill=python
pub async fn handle_export_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ExportReport>, AppError> {
    if query.skill.trim().is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }
    let records = state.store.snapshot().await;
    let matches = search_by_skill(&records, &query.skill, query.options());
    let dir = state.config.export_dir.clone();
    let report = tokio::task::spawn_blocking(move || {
        export_search_csv(&matches, &dir, "skill_search_results")
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(report))
}

/// POST /api/v1/resumes/analytics/export
pub async fn handle_export_analytics(
    State(state): State<AppState>,
) -> Result<Json<ExportReport>, AppError> {
    let report = compute_analytics(&state.store.snapshot().await);
    let dir = state.config.export_dir.clone();
    let export =
        tokio::task::spawn_blocking(move || export_analytics_csv(&report, &dir, "analytics"))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(export))
}
