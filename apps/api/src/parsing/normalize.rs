//! Text normalization: two cleaning views over the same raw document text.
//!
//! `flat` collapses every whitespace run (newlines included) to one space and
//! feeds the field regexes. `lined` keeps line structure for section detection.

/// Both cleaned views of one document. Pure function of the raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedText {
    pub flat: String,
    pub lined: Vec<String>,
}

impl NormalizedText {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            flat: normalize_flat(raw),
            lined: normalize_lines(raw),
        }
    }
}

/// Replaces every run of whitespace with a single space and trims both ends.
pub fn normalize_flat(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits on line breaks, collapses whitespace inside each line and drops
/// lines that end up empty. Surviving lines keep their relative order.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(normalize_flat)
        .filter(|line| !line.is_empty())
        .collect()
}
