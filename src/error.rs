//! Error types for export operations
//!
//! Every failure in a run falls into one of four kinds. Fetch, parse and
//! write errors are contained at the granularity where they happen (one
//! media item or one document); only configuration errors stop a run, and
//! those are raised before the batch starts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Error types for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// Remote call could not be made or returned a non-success status
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Remote payload could not be decoded
    #[error("Failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    /// Filesystem write failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing or invalid run-level configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExportError {
    pub(crate) fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        ExportError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(context: impl Into<String>, message: impl ToString) -> Self {
        ExportError::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must abort the whole run
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExportError::Config(_))
    }

    /// Short label for log lines
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ExportError::Fetch { .. } => "FetchError",
            ExportError::Parse { .. } => "ParseError",
            ExportError::Write { .. } => "WriteError",
            ExportError::Config(_) => "ConfigError",
        }
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        ExportError::fetch(url, error)
    }
}
