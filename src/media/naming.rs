//! Local file naming for downloaded media
//!
//! A name is taken from the URL's last path segment when that segment has a
//! plausible extension. Otherwise (no extension, an extension longer than
//! five characters, or a query-only URL) the name is synthesized from the
//! URL itself, so the same URL always maps to the same file.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use crate::utils::{
    DEFAULT_IMAGE_EXTENSION, ENCODED_NAME_LEN, MAX_EXTENSION_LEN, last_path_segment,
    safe_truncate_chars, sanitize_filename,
};

/// Final, sanitized file name for a media URL.
///
/// A non-empty `suggested_name` wins over anything derived from the URL.
#[must_use]
pub fn media_file_name(url: &str, suggested_name: Option<&str>) -> String {
    let candidate = match suggested_name.filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => derive_media_name(url),
    };
    sanitize_filename(&candidate)
}

/// Unsanitized candidate name derived from the URL alone
#[must_use]
pub fn derive_media_name(url: &str) -> String {
    let candidate = last_path_segment(url);
    match extension(&candidate) {
        Some(ext) if ext.chars().count() <= MAX_EXTENSION_LEN => candidate,
        _ => encoded_media_name(url),
    }
}

/// `<first 10 chars of URL-safe base64(url)>.jpg`
#[must_use]
pub fn encoded_media_name(url: &str) -> String {
    let encoded = URL_SAFE.encode(url.as_bytes());
    format!(
        "{}.{}",
        safe_truncate_chars(&encoded, ENCODED_NAME_LEN),
        DEFAULT_IMAGE_EXTENSION
    )
}

/// Extension of `name` including the dot, if any.
///
/// Leading dots do not start an extension: `.hidden` has none, `a.png` has
/// `.png`, `a.` has `.`.
fn extension(name: &str) -> Option<&str> {
    let dot = name.rfind('.')?;
    if name[..dot].trim_start_matches('.').is_empty() {
        return None;
    }
    Some(&name[dot..])
}
