//! Builder methods available for all states
//!
//! Optional settings can be supplied before or after the required ones.

use std::time::Duration;

use super::builder::ExportConfigBuilder;
use super::types::TraversalMode;

impl<State> ExportConfigBuilder<State> {
    /// Override the API root (useful for regional endpoints and tests)
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pause between successive API calls. Zero disables pacing.
    #[must_use]
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay_ms = delay.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn media_timeout_secs(mut self, secs: u64) -> Self {
        self.media_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.api_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_media_size(mut self, bytes: usize) -> Self {
        self.max_media_size = bytes;
        self
    }

    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Prefix for the id key in front matter (`<key>_id`)
    #[must_use]
    pub fn source_key(mut self, key: impl Into<String>) -> Self {
        self.source_key = key.into();
        self
    }

    /// Prefix media file names with the owning article id so two articles
    /// can never overwrite each other's images.
    #[must_use]
    pub fn namespace_media(mut self, enabled: bool) -> Self {
        self.namespace_media = enabled;
        self
    }
}
