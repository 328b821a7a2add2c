use crate::error::ScrapeError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"\d+\.\d+\.\d+").expect("Failed to create date regex");
}

/// Returns the first `D+.D+.D+` substring of `text`, untouched.
///
/// No calendar validation happens here, `99.99.9999` is returned as is.
pub fn extract_date(text: &str) -> Result<String, ScrapeError> {
    DATE_PATTERN
        .find(text)
        .map(|date| date.as_str().to_string())
        .ok_or_else(|| ScrapeError::NoDateFound {
            text: text.to_string(),
        })
}
