//! Record builder: runs normalization, extraction and classification for one
//! document and assembles the `ResumeRecord`.

use tracing::debug;
use uuid::Uuid;

use crate::models::resume::{FileInfo, ResumeRecord, ResumeSummary};
use crate::parsing::contact::ContactExtractor;
use crate::parsing::normalize::NormalizedText;
use crate::parsing::reader::{is_read_failure, ReadError};
use crate::parsing::sections::classify_sections;
use crate::parsing::skills::extract_skills;

/// Stateless apart from its compiled contact patterns; safe to share across
/// threads and to run on many documents at once.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    contact: ContactExtractor,
}

impl ResumeParser {
    pub fn new(contact: ContactExtractor) -> Self {
        Self { contact }
    }

    /// Builds a record from raw document text. Text carrying a reader failure
    /// sentinel short-circuits into a failed record without extraction.
    pub fn build_record(&self, raw_text: &str, file_info: FileInfo) -> ResumeRecord {
        if is_read_failure(raw_text) {
            debug!("Skipping extraction for '{}': {raw_text}", file_info.name);
            return ResumeRecord::failed(file_info, raw_text);
        }

        let text = NormalizedText::from_raw(raw_text);
        let contact = self.contact.extract(&text.flat);
        let skills = extract_skills(&text.flat);
        let sections = classify_sections(&text.lined);

        let summary = ResumeSummary {
            total_skills_found: skills.len(),
            education_lines: sections.education.len(),
            experience_lines: sections.experience.len(),
            raw_text_length: raw_text.chars().count(),
        };

        debug!(
            "Parsed '{}': {} skills, {} education, {} experience lines",
            file_info.name, summary.total_skills_found, summary.education_lines, summary.experience_lines
        );

        ResumeRecord {
            id: Uuid::new_v4(),
            file_info,
            contact,
            skills,
            education: sections.education,
            experience: sections.experience,
            summary,
            error: None,
        }
    }

    /// Builds a record from a reader outcome.
    pub fn build_from_read(
        &self,
        read: Result<String, ReadError>,
        file_info: FileInfo,
    ) -> ResumeRecord {
        match read {
            Ok(raw_text) => self.build_record(&raw_text, file_info),
            Err(e) => ResumeRecord::failed(file_info, e.to_string()),
        }
    }
}
