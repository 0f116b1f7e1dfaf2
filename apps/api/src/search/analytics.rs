use serde::Serialize;

use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsRow {
    pub file: String,
    pub email: String,
    pub skills: usize,
    pub education: usize,
    pub experience: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub rows: Vec<AnalyticsRow>,
    pub total_skills: usize,
    pub avg_skills: f64,
    pub successful: usize,
    pub total: usize,
}

/// Collection overview. Failed records count toward `total` only.
pub fn compute_analytics(records: &[ResumeRecord]) -> AnalyticsReport {
    let rows: Vec<AnalyticsRow> = records
        .iter()
        .filter(|r| r.is_ok())
        .map(|r| AnalyticsRow {
            file: r.file_info.name.clone(),
            email: r.contact.email_or_sentinel().to_string(),
            skills: r.skills.len(),
            education: r.education.len(),
            experience: r.experience.len(),
        })
        .collect();

    let total_skills: usize = rows.iter().map(|r| r.skills).sum();
    let avg_skills = if rows.is_empty() {
        0.0
    } else {
        total_skills as f64 / rows.len() as f64
    };

    AnalyticsReport {
        successful: rows.len(),
        total: records.len(),
        total_skills,
        avg_skills,
        rows,
    }
}
