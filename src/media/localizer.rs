//! Media download and local persistence
//!
//! [`MediaLocalizer::localize`] fetches one remote asset with a bounded
//! timeout and size, names it per [`super::naming`], and writes it into the
//! run's flat media directory. Failures come back as
//! [`ExportError::Fetch`] or [`ExportError::Write`]; callers treat them as
//! "skip this image", never as fatal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::utils::{DEFAULT_MAX_MEDIA_SIZE, MEDIA_TIMEOUT, USER_AGENT, is_valid_url};

use super::naming::media_file_name;

/// A remote asset copied to local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedMedia {
    /// Where the bytes were written
    pub path: PathBuf,
    /// Sanitized file name (the value written into the rewritten `src`)
    pub file_name: String,
    /// URL the bytes came from
    #[serde(skip)]
    pub source_url: String,
}

/// Downloads media into one flat directory
#[derive(Debug, Clone)]
pub struct MediaLocalizer {
    client: Client,
    media_dir: PathBuf,
    timeout: Duration,
    max_size: usize,
}

impl MediaLocalizer {
    pub fn new(client: Client, media_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            media_dir: media_dir.into(),
            timeout: MEDIA_TIMEOUT,
            max_size: DEFAULT_MAX_MEDIA_SIZE,
        }
    }

    /// Localizer writing into `config.images_dir()` with the configured limits
    pub fn from_config(client: Client, config: &ExportConfig) -> Self {
        Self::new(client, config.images_dir())
            .with_timeout(config.media_timeout())
            .with_max_size(config.max_media_size())
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    #[must_use]
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Fetch `url` and store it under the media directory.
    ///
    /// # Errors
    ///
    /// [`ExportError::Fetch`] when the URL is not absolute http(s), the request
    /// fails or times out, the status is not a success, or the body exceeds the
    /// size ceiling. [`ExportError::Write`] when the file cannot be written.
    pub async fn localize(
        &self,
        url: &str,
        suggested_name: Option<&str>,
    ) -> ExportResult<LocalizedMedia> {
        if !is_valid_url(url) {
            return Err(ExportError::fetch(url, "not an absolute http(s) URL"));
        }

        let bytes = self.download(url).await?;

        let file_name = media_file_name(url, suggested_name);
        let path = self.media_dir.join(&file_name);

        tokio::fs::create_dir_all(&self.media_dir)
            .await
            .map_err(|e| ExportError::write(&self.media_dir, e))?;
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| ExportError::write(&path, e))?;

        log::debug!("Saved {} bytes from {} to {}", bytes.len(), url, path.display());

        Ok(LocalizedMedia {
            path,
            file_name,
            source_url: url.to_string(),
        })
    }

    /// Streamed, size-bounded GET
    async fn download(&self, url: &str) -> ExportResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "image/avif,image/webp,image/apng,image/*,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| ExportError::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(ExportError::fetch(
                url,
                format!("status {}", response.status()),
            ));
        }

        // Enforce limit BEFORE downloading when the server announces a size
        let expected_size = response.content_length().unwrap_or(0);
        if expected_size > self.max_size as u64 {
            return Err(ExportError::fetch(
                url,
                format!(
                    "media too large: {} bytes exceeds limit of {} bytes",
                    expected_size, self.max_size
                ),
            ));
        }

        let mut buffer = Vec::with_capacity(expected_size as usize);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ExportError::fetch(url, e))?;
            if buffer.len() + chunk.len() > self.max_size {
                return Err(ExportError::fetch(
                    url,
                    format!("media exceeded size limit of {} bytes", self.max_size),
                ));
            }
            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer)
    }
}
