//! Media attachment URL validation

use once_cell::sync::Lazy;
use regex::Regex;

// Only direct http(s) links to common image formats are accepted as
// outbound attachments.
static MEDIA_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://\S+\.(jpg|jpeg|png|gif)$").unwrap()
});

/// Check whether a URL is an acceptable media attachment
pub fn is_valid_media_url(url: &str) -> bool {
    MEDIA_URL_REGEX.is_match(url)
}
