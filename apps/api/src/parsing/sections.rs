//! Section classifier: buckets lined text into education / experience evidence.
//!
//! Matching is plain lowercase substring containment. Education wins when a
//! line carries keywords from both sets.

use serde::Serialize;

const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "academic",
    "degree",
    "degrees",
    "college",
    "university",
    "b.tech",
    "btech",
    "b.e",
    "be",
    "bachelor",
    "master",
    "m.tech",
    "mtech",
    "bsc",
    "msc",
    "diploma",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "internship",
    "intern",
    "company",
    "organization",
    "worked",
    "job",
    "role",
    "position",
];

const MIN_LINE_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Experience,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionEvidence {
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

/// Classifies a single normalized line. Lines under three characters are ignored.
pub fn classify_line(line: &str) -> Option<Section> {
    if line.chars().count() < MIN_LINE_CHARS {
        return None;
    }
    let lower = line.to_lowercase();
    if EDUCATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Some(Section::Education)
    } else if EXPERIENCE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Some(Section::Experience)
    } else {
        None
    }
}

pub fn classify_sections(lines: &[String]) -> SectionEvidence {
    let mut evidence = SectionEvidence::default();
    for line in lines {
        let bucket = match classify_line(line) {
            Some(Section::Education) => &mut evidence.education,
            Some(Section::Experience) => &mut evidence.experience,
            None => continue,
        };
        if !bucket.contains(line) {
            bucket.push(line.clone());
        }
    }
    evidence
}
