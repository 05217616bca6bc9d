//! Type-safe builder for `ExportConfig` using the typestate pattern
//!
//! The API token and the output directory are required; `build()` only
//! exists once both have been supplied.

use std::marker::PhantomData;
use std::path::PathBuf;

use crate::error::{ExportError, ExportResult};
use crate::utils::{
    API_TIMEOUT, DEFAULT_API_URL, DEFAULT_MAX_MEDIA_SIZE, DEFAULT_PAGE_SIZE,
    DEFAULT_REQUEST_DELAY, DEFAULT_SOURCE_KEY, MEDIA_TIMEOUT, is_valid_url, sanitize_filename,
};

use super::types::{ExportConfig, TraversalMode};

// Type states for the builder
pub struct WithApiToken;
pub struct Complete;

pub struct ExportConfigBuilder<State = ()> {
    pub(crate) api_token: Option<String>,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) api_url: String,
    pub(crate) mode: TraversalMode,
    pub(crate) request_delay_ms: u64,
    pub(crate) media_timeout_secs: u64,
    pub(crate) api_timeout_secs: u64,
    pub(crate) max_media_size: usize,
    pub(crate) page_size: usize,
    pub(crate) source_key: String,
    pub(crate) namespace_media: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ExportConfigBuilder<()> {
    fn default() -> Self {
        Self {
            api_token: None,
            output_dir: None,
            api_url: DEFAULT_API_URL.to_string(),
            mode: TraversalMode::default(),
            request_delay_ms: DEFAULT_REQUEST_DELAY.as_millis() as u64,
            media_timeout_secs: MEDIA_TIMEOUT.as_secs(),
            api_timeout_secs: API_TIMEOUT.as_secs(),
            max_media_size: DEFAULT_MAX_MEDIA_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            source_key: DEFAULT_SOURCE_KEY.to_string(),
            namespace_media: false,
            _phantom: PhantomData,
        }
    }
}

impl ExportConfig {
    /// Create a builder for configuring an `ExportConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ExportConfigBuilder<()> {
        ExportConfigBuilder::default()
    }
}

impl<State> ExportConfigBuilder<State> {
    fn into_state<Next>(self) -> ExportConfigBuilder<Next> {
        ExportConfigBuilder {
            api_token: self.api_token,
            output_dir: self.output_dir,
            api_url: self.api_url,
            mode: self.mode,
            request_delay_ms: self.request_delay_ms,
            media_timeout_secs: self.media_timeout_secs,
            api_timeout_secs: self.api_timeout_secs,
            max_media_size: self.max_media_size,
            page_size: self.page_size,
            source_key: self.source_key,
            namespace_media: self.namespace_media,
            _phantom: PhantomData,
        }
    }
}

impl ExportConfigBuilder<()> {
    pub fn api_token(mut self, token: impl Into<String>) -> ExportConfigBuilder<WithApiToken> {
        self.api_token = Some(token.into());
        self.into_state()
    }
}

impl ExportConfigBuilder<WithApiToken> {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> ExportConfigBuilder<Complete> {
        self.output_dir = Some(dir.into());
        self.into_state()
    }
}

// Build method only available when all required fields are set
impl ExportConfigBuilder<Complete> {
    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] for an empty token, an API root that is
    /// not an absolute http(s) URL, a zero page size, or a source key with no
    /// filename-safe characters.
    pub fn build(self) -> ExportResult<ExportConfig> {
        let api_token = self
            .api_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ExportError::Config("API token is required".to_string()))?;

        let output_dir = self
            .output_dir
            .ok_or_else(|| ExportError::Config("output_dir is required".to_string()))?;

        if !is_valid_url(&self.api_url) {
            return Err(ExportError::Config(format!(
                "api_url must be an absolute http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.page_size == 0 {
            return Err(ExportError::Config("page_size must be at least 1".to_string()));
        }

        let source_key = sanitize_filename(self.source_key.trim());
        if source_key.trim_matches('_').is_empty() {
            return Err(ExportError::Config(format!(
                "source_key '{}' has no usable characters",
                self.source_key
            )));
        }

        Ok(ExportConfig {
            api_token,
            output_dir,
            api_url: self.api_url.trim_end_matches('/').to_string(),
            mode: self.mode,
            request_delay_ms: self.request_delay_ms,
            media_timeout_secs: self.media_timeout_secs.max(1),
            api_timeout_secs: self.api_timeout_secs.max(1),
            max_media_size: self.max_media_size,
            page_size: self.page_size,
            source_key,
            namespace_media: self.namespace_media,
        })
    }
}
