//! Filename-safe string transforms
//!
//! Titles, taxonomy labels and media names are arbitrary user text. Before
//! any of them becomes a path component it goes through [`sanitize_filename`],
//! which guarantees the result cannot contain a path separator, a control
//! character or anything else outside `[A-Za-z0-9_.-]`.

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
///
/// The mapping is per character (not per byte), so a multi-byte character
/// becomes a single underscore. Applying it twice is a no-op.
///
/// # Examples
/// ```
/// # use helpcenter_export::utils::sanitize_filename;
/// assert_eq!(sanitize_filename("Getting started/FAQ"), "Getting_started_FAQ");
/// assert_eq!(sanitize_filename("photo-1.png"), "photo-1.png");
/// assert_eq!(sanitize_filename("café"), "caf_");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if is_filename_safe(c) { c } else { '_' })
        .collect()
}

/// Whether a character may appear in a sanitized name
#[inline]
#[must_use]
pub fn is_filename_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Safely truncate a string to a maximum number of characters (not bytes).
///
/// Never splits a multi-byte character.
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}
