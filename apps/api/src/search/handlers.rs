//! Axum route handlers for skill search and analytics.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::search::analytics::{compute_analytics, AnalyticsReport};
use crate::search::skill_search::{search_by_skill, SearchMatch, SearchOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub skill: String,
    pub case_sensitive: Option<bool>,
    pub partial_match: Option<bool>,
}

impl SearchQuery {
    pub fn options(&self) -> SearchOptions {
        let defaults = SearchOptions::default();
        SearchOptions {
            case_sensitive: self.case_sensitive.unwrap_or(defaults.case_sensitive),
            partial_match: self.partial_match.unwrap_or(defaults.partial_match),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub skill: String,
    pub found: usize,
    pub matches: Vec<SearchMatch>,
}

/// GET /api/v1/resumes/search?skill=python&case_sensitive=false&partial_match=true
pub async fn handle_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let records = state.store.snapshot().await;
    let matches = search_by_skill(&records, &query.skill, query.options());
    Json(SearchResponse {
        skill: query.skill,
        found: matches.len(),
        matches,
    })
}

/// GET /api/v1/resumes/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    let records = state.store.snapshot().await;
    Json(compute_analytics(&records))
}
