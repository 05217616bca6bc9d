pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{is_filename_safe, safe_truncate_chars, sanitize_filename};
pub use url_utils::{is_valid_url, join_endpoint, last_path_segment};
