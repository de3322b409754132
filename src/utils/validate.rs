//! Syntactic pre-filter for user-entered YouTube URLs

use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$").unwrap()
});

/// Trims the input and checks it against the YouTube URL shape.
///
/// A pass is not a guarantee the backend can resolve the URL; it only keeps
/// obviously wrong input from producing a network round trip. The error is
/// the user-facing message for the shared error area.
pub fn validate_url(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Please enter a YouTube URL");
    }
    if !YOUTUBE_URL_RE.is_match(trimmed) {
        return Err("Please enter a valid YouTube URL");
    }
    Ok(trimmed.to_string())
}
