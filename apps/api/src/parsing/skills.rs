//! Skill extraction against a fixed, controlled vocabulary.
//!
//! Each vocabulary entry is compiled once into a case-insensitive pattern that
//! only matches when the term is not glued to a word character on either side.
//! Multi-word phrases are checked before single words. Matches are additive:
//! a phrase hit never suppresses a single-word hit, and vice versa.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// The controlled vocabulary, lowercase. Nothing outside this list is ever reported.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python",
    "java",
    "c",
    "c++",
    "c#",
    "javascript",
    "typescript",
    "php",
    "go",
    "ruby",
    "kotlin",
    "swift",
    // Web
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    // Data / ML
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "pandas",
    "numpy",
    "machine learning",
    "deep learning",
    "data analysis",
    "data science",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    // Tools
    "excel",
    "git",
    "docker",
    "kubernetes",
    "linux",
];

static MATCHER: Lazy<SkillMatcher> = Lazy::new(|| SkillMatcher::new(SKILL_VOCABULARY));

pub struct SkillMatcher {
    multi_word: Vec<(&'static str, Regex)>,
    single_word: Vec<(&'static str, Regex)>,
}

impl SkillMatcher {
    fn new(vocabulary: &[&'static str]) -> Self {
        let mut multi_word = Vec::new();
        let mut single_word = Vec::new();
        for &skill in vocabulary {
            let pattern = RegexBuilder::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(skill)))
                .case_insensitive(true)
                .build()
                .expect("escaped skill pattern is valid");
            if skill.contains(' ') {
                multi_word.push((skill, pattern));
            } else {
                single_word.push((skill, pattern));
            }
        }
        Self {
            multi_word,
            single_word,
        }
    }

    pub fn extract(&self, flat: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .multi_word
            .iter()
            .chain(self.single_word.iter())
            .filter(|(_, pattern)| pattern.is_match(flat))
            .map(|(skill, _)| skill.to_string())
            .collect();
        found.sort_by_key(|s| s.to_lowercase());
        found.dedup();
        found
    }
}

/// Vocabulary skills present in `flat`, sorted case-insensitively, no duplicates.
pub fn extract_skills(flat: &str) -> Vec<String> {
    MATCHER.extract(flat)
}
