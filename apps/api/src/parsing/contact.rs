//! Contact extraction: email and phone matchers over the flat text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Regional default: optional `+91`/`91` prefix, then a 10-digit mobile
/// number starting with 6 to 9. Override with `PHONE_PATTERN`.
pub const DEFAULT_PHONE_PATTERN: &str = r"(?:\+?91[\s\-]*)?[6-9][0-9]{9}";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));
static DEFAULT_PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_PHONE_PATTERN).expect("default phone pattern is valid")
});

#[derive(Debug, Clone)]
pub struct ContactExtractor {
    phone: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE_RE.clone(),
        }
    }
}

impl ContactExtractor {
    pub fn with_phone_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            phone: Regex::new(pattern)?,
        })
    }

    pub fn extract(&self, flat: &str) -> ContactInfo {
        let (email, all_emails) = primary_and_all(&EMAIL_RE, flat);
        let (phone, all_phones) = primary_and_all(&self.phone, flat);
        ContactInfo {
            email,
            phone,
            all_emails,
            all_phones,
        }
    }
}

/// First match in document order, plus every distinct match in first-seen order.
fn primary_and_all(re: &Regex, text: &str) -> (Option<String>, Vec<String>) {
    let mut all: Vec<String> = Vec::new();
    let mut primary = None;
    for m in re.find_iter(text) {
        let found = m.as_str();
        if primary.is_none() {
            primary = Some(found.to_string());
        }
        if !all.iter().any(|seen| seen == found) {
            all.push(found.to_string());
        }
    }
    (primary, all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ContactInfo {
        ContactExtractor::default().extract(text)
    }

    #[test]
    fn test_email_found_with_trailing_punctuation() {
        let info = extract("Contact: jane.doe@example.com, +91 9876543210.");
        assert_eq!(info.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(info.all_emails, vec!["jane.doe@example.com"]);
    }

    #[test]
    fn test_email_rejects_short_tld() {
        let info = extract("write to someone@host.x please");
        assert_eq!(info.email, None);
        assert_eq!(info.email_or_sentinel(), "Not found");
    }

    #[test]
    fn test_emails_dedup_preserves_first_seen_order() {
        let info = extract("b@x.io a@y.org b@x.io c_1+tag@mail.co.in a@y.org");
        assert_eq!(info.email.as_deref(), Some("b@x.io"));
        assert_eq!(info.all_emails, vec!["b@x.io", "a@y.org", "c_1+tag@mail.co.in"]);
    }

    #[test]
    fn test_phone_with_country_prefix() {
        let info = extract("Phone: +91 9876543210.");
        assert_eq!(info.phone.as_deref(), Some("+91 9876543210"));
    }

    #[test]
    fn test_phone_prefix_with_dash_and_bare_91() {
        let info = extract("call +91-8123456789 or 91 7000000001");
        assert_eq!(info.all_phones, vec!["+91-8123456789", "91 7000000001"]);
    }

    #[test]
    fn test_phone_without_prefix() {
        let info = extract("mobile 6000012345");
        assert_eq!(info.phone.as_deref(), Some("6000012345"));
    }

    #[test]
    fn test_phone_must_start_with_six_to_nine() {
        let info = extract("ref no 5123456789");
        assert_eq!(info.phone, None);
        assert!(info.all_phones.is_empty());
    }

    #[test]
    fn test_primary_is_first_of_all() {
        let info = extract("9876543210 and 9123456780 and 9876543210");
        assert_eq!(info.phone.as_deref(), info.all_phones.first().map(String::as_str));
        assert_eq!(info.all_phones.len(), 2);
    }

    #[test]
    fn test_custom_phone_pattern() {
        let us = ContactExtractor::with_phone_pattern(r"\(\d{3}\) \d{3}-\d{4}").unwrap();
        let info = us.extract("Tel (415) 555-0100");
        assert_eq!(info.phone.as_deref(), Some("(415) 555-0100"));
    }

    #[test]
    fn test_invalid_phone_pattern_is_rejected() {
        assert!(ContactExtractor::with_phone_pattern("([").is_err());
    }

    #[test]
    fn test_empty_text_yields_sentinels() {
        let info = extract("");
        assert_eq!(info, ContactInfo::default());
        assert_eq!(info.phone_or_sentinel(), "Not found");
    }
}
