//! Contact parser: three independent heuristics over the OCR text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

/// Optional country code, optional parentheses, `-`/`.`/space between 3-3-4 digit groups.
/// Loose on purpose: any ten-digit run matches.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}")
        .expect("valid phone regex")
});

/// Only the top of the document is searched for a name.
const NAME_WINDOW_LINES: usize = 5;

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// First of the leading lines that is non-blank and has no digit, trimmed.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .take(NAME_WINDOW_LINES)
        .find(|line| !line.trim().is_empty() && !line.chars().any(char::is_numeric))
        .map(|line| line.trim().to_string())
}
