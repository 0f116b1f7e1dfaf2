//! Skill search over an already-parsed collection.
//!
//! Read-only: takes the records as an argument and recomputes matches on every
//! query. Nothing is cached on the records.

use serde::Serialize;
use tracing::debug;

use crate::models::resume::{FileInfo, ResumeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatch {
    pub skill: String,
    pub match_type: MatchKind,
}

/// Result row for one record that matched the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub file_info: FileInfo,
    pub matched_skills: Vec<SkillMatch>,
    pub match_count: usize,
    pub total_skills: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    /// Substring containment in either direction counts as a match.
    pub partial_match: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            partial_match: true,
        }
    }
}

/// Records matching `query`, most matches first. Ties keep collection order.
pub fn search_by_skill(
    records: &[ResumeRecord],
    query: &str,
    options: SearchOptions,
) -> Vec<SearchMatch> {
    if query.is_empty() || records.is_empty() {
        return Vec::new();
    }

    let query = if options.case_sensitive {
        query.to_string()
    } else {
        query.trim().to_lowercase()
    };
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchMatch> = records
        .iter()
        .filter(|r| r.is_ok())
        .filter_map(|record| {
            let matched_skills: Vec<SkillMatch> = record
                .skills
                .iter()
                .filter_map(|skill| match_skill(&query, skill, options))
                .collect();
            if matched_skills.is_empty() {
                return None;
            }
            Some(SearchMatch {
                file_info: record.file_info.clone(),
                match_count: matched_skills.len(),
                matched_skills,
                total_skills: record.skills.len(),
            })
        })
        .collect();

    // stable: equal counts keep input order
    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    debug!("Skill search '{query}' matched {} records", results.len());
    results
}

fn match_skill(query: &str, skill: &str, options: SearchOptions) -> Option<SkillMatch> {
    let candidate = if options.case_sensitive {
        skill.to_string()
    } else {
        skill.to_lowercase()
    };

    let match_type = if options.partial_match {
        if !(candidate.contains(query) || query.contains(candidate.as_str())) {
            return None;
        }
        if query.chars().count() < candidate.chars().count() {
            MatchKind::Partial
        } else {
            MatchKind::Exact
        }
    } else if candidate == query {
        MatchKind::Exact
    } else {
        return None;
    };

    Some(SkillMatch {
        skill: skill.to_string(),
        match_type,
    })
}
