//! Getter methods for `ExportConfig`

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::{ARTICLES_DIR_NAME, IMAGES_DIR_NAME, SUMMARY_FILE_NAME};

use super::types::{ExportConfig, TraversalMode};

impl ExportConfig {
    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    #[must_use]
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    #[must_use]
    pub fn media_timeout(&self) -> Duration {
        Duration::from_secs(self.media_timeout_secs)
    }

    #[must_use]
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    #[must_use]
    pub fn max_media_size(&self) -> usize {
        self.max_media_size
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    #[must_use]
    pub fn namespace_media(&self) -> bool {
        self.namespace_media
    }

    /// `<output>/articles`
    #[must_use]
    pub fn articles_dir(&self) -> PathBuf {
        self.output_dir.join(ARTICLES_DIR_NAME)
    }

    /// `<output>/images`, the single flat media directory
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join(IMAGES_DIR_NAME)
    }

    /// `<output>/articles_metadata.json`
    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }
}
