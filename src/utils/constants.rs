//! Shared configuration constants for the exporter
//!
//! Default values used by the config builder, the API client and the
//! media localizer, kept in one place to avoid magic numbers.

use std::time::Duration;

/// Default help-center API root (Intercom-compatible)
pub const DEFAULT_API_URL: &str = "https://api.intercom.io";

/// Environment variable holding the bearer token
pub const API_TOKEN_ENV: &str = "INTERCOM_API_TOKEN";

/// Default pause between successive remote API calls
///
/// The remote service throttles aggressively; one second keeps a full
/// export well inside its published limits.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Ceiling for a single media download
pub const MEDIA_TIMEOUT: Duration = Duration::from_secs(30);

/// Ceiling for a single API call
pub const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest media body accepted (bytes)
pub const DEFAULT_MAX_MEDIA_SIZE: usize = 20 * 1024 * 1024;

/// Page size requested from listing endpoints
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Extension given to synthesized media names
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Longest extension (dot included) accepted from a URL path
pub const MAX_EXTENSION_LEN: usize = 5;

/// Characters of the base64 URL encoding kept in synthesized names
pub const ENCODED_NAME_LEN: usize = 10;

/// Key prefix for the source id field in front matter (`intercom_id`)
pub const DEFAULT_SOURCE_KEY: &str = "intercom";

/// Taxonomy label used when a record carries no collection
pub const DEFAULT_COLLECTION_LABEL: &str = "General";

/// Taxonomy label used when a record carries no section
pub const DEFAULT_SECTION_LABEL: &str = "Uncategorized";

/// Title used when a record carries none
pub const DEFAULT_TITLE: &str = "Untitled Article";

/// Sub-directory of the output root holding article files
pub const ARTICLES_DIR_NAME: &str = "articles";

/// Sub-directory of the output root holding media files
pub const IMAGES_DIR_NAME: &str = "images";

/// File name of the run summary
pub const SUMMARY_FILE_NAME: &str = "articles_metadata.json";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("helpcenter-export/", env!("CARGO_PKG_VERSION"));

/// Longest sanitized label used as a single path component (characters)
pub const MAX_PATH_COMPONENT_CHARS: usize = 200;

/// Output root used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";
