//! Media localization
//!
//! Copies remotely hosted images into the export tree under
//! filesystem-safe, deterministic names.

pub mod localizer;
pub mod naming;

pub use localizer::{LocalizedMedia, MediaLocalizer};
pub use naming::{derive_media_name, encoded_media_name, media_file_name};
