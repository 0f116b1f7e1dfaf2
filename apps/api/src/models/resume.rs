use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Placeholder rendered for a contact field with no match.
pub const NOT_FOUND: &str = "Not found";

/// Identity of the uploaded document a record was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub size_bytes: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Contact fields pulled from the flat text. The primary value is always the
/// first match in document order; the `all_*` lists are deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    #[serde(serialize_with = "or_not_found")]
    pub email: Option<String>,
    #[serde(serialize_with = "or_not_found")]
    pub phone: Option<String>,
    pub all_emails: Vec<String>,
    pub all_phones: Vec<String>,
}

impl ContactInfo {
    pub fn email_or_sentinel(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn phone_or_sentinel(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }
}

fn or_not_found<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(NOT_FOUND))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeSummary {
    pub total_skills_found: usize,
    pub education_lines: usize,
    pub experience_lines: usize,
    /// Character count of the raw document text, before normalization.
    pub raw_text_length: usize,
}

/// Structured extraction result for one document.
///
/// A record carrying `error` is terminal: it is excluded from search,
/// analytics and tabular export, but still counted as a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub file_info: FileInfo,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub summary: ResumeSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResumeRecord {
    /// A record for a document that could not be read. Only `error` is populated.
    pub fn failed(file_info: FileInfo, error: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_info,
            contact: ContactInfo::default(),
            skills: Vec::new(),
            education: Vec::new(),
            experience: Vec::new(),
            summary: ResumeSummary::default(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
