use std::path::Path;

use tracing::info;

use crate::export::{write_atomically, ExportError, ExportReport};
use crate::models::resume::ResumeRecord;
use crate::search::analytics::AnalyticsReport;
use crate::search::skill_search::SearchMatch;

const TOP_SKILLS: usize = 5;

const RESUME_HEADER: &[&str] = &[
    "file_name",
    "file_size_kb",
    "email",
    "phone",
    "total_skills",
    "skills_list",
    "education_lines",
    "experience_lines",
    "raw_text_length",
];

const SEARCH_HEADER: &[&str] = &[
    "file_name",
    "file_size_kb",
    "matched_skills",
    "match_count",
    "total_skills",
];

const ANALYTICS_HEADER: &[&str] = &["File", "Email", "Skills", "Education", "Experience"];

/// First five skills, with `...` appended when more were found.
fn skills_preview(skills: &[String]) -> String {
    let mut preview = skills
        .iter()
        .take(TOP_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > TOP_SKILLS {
        preview.push_str("...");
    }
    preview
}

fn resume_row(record: &ResumeRecord) -> Vec<String> {
    vec![
        record.file_info.name.clone(),
        format!("{:.2}", record.file_info.size_kb()),
        record.contact.email_or_sentinel().to_string(),
        record.contact.phone_or_sentinel().to_string(),
        record.summary.total_skills_found.to_string(),
        skills_preview(&record.skills),
        record.summary.education_lines.to_string(),
        record.summary.experience_lines.to_string(),
        record.summary.raw_text_length.to_string(),
    ]
}

/// Header plus one row per successful record. Failed records are only counted.
pub fn export_csv(
    records: &[ResumeRecord],
    dir: &Path,
    base: &str,
) -> Result<ExportReport, ExportError> {
    let valid: Vec<&ResumeRecord> = records.iter().filter(|r| r.is_ok()).collect();
    let failed = records.len() - valid.len();
    if valid.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let path = write_atomically(dir, base, "csv", |file| {
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(RESUME_HEADER)?;
        for record in &valid {
            wtr.write_record(resume_row(record))?;
        }
        wtr.flush()?;
        Ok(())
    })?;

    info!(
        "CSV saved: {} ({} valid / {} failed resumes)",
        path.display(),
        valid.len(),
        failed
    );
    Ok(ExportReport {
        path,
        exported: valid.len(),
        failed,
    })
}

pub fn export_search_csv(
    matches: &[SearchMatch],
    dir: &Path,
    base: &str,
) -> Result<ExportReport, ExportError> {
    if matches.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let path = write_atomically(dir, base, "csv", |file| {
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(SEARCH_HEADER)?;
        for m in matches {
            let skills = m
                .matched_skills
                .iter()
                .map(|s| s.skill.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            wtr.write_record([
                m.file_info.name.clone(),
                format!("{:.2}", m.file_info.size_kb()),
                skills,
                m.match_count.to_string(),
                m.total_skills.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    })?;

    info!("Search CSV saved: {} ({} rows)", path.display(), matches.len());
    Ok(ExportReport {
        path,
        exported: matches.len(),
        failed: 0,
    })
}

pub fn export_analytics_csv(
    report: &AnalyticsReport,
    dir: &Path,
    base: &str,
) -> Result<ExportReport, ExportError> {
    if report.rows.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let path = write_atomically(dir, base, "csv", |file| {
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(ANALYTICS_HEADER)?;
        for row in &report.rows {
            wtr.write_record([
                row.file.clone(),
                row.email.clone(),
                row.skills.to_string(),
                row.education.to_string(),
                row.experience.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    })?;

    info!("Analytics CSV saved: {} ({} rows)", path.display(), report.rows.len());
    Ok(ExportReport {
        path,
        exported: report.rows.len(),
        failed: report.total - report.successful,
    })
}
