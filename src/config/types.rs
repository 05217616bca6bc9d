//! Core configuration types for an export run
//!
//! `ExportConfig` carries every output location and tuning knob explicitly;
//! nothing in the pipeline reads process-wide state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ExportError;

/// How the exporter discovers articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// List every article; taxonomy labels come from each fetched record
    #[default]
    Flat,
    /// Walk collection → section → article; labels come from the walk
    Hierarchical,
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalMode::Flat => write!(f, "flat"),
            TraversalMode::Hierarchical => write!(f, "hierarchical"),
        }
    }
}

impl FromStr for TraversalMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "hierarchical" | "tree" => Ok(Self::Hierarchical),
            other => Err(ExportError::Config(format!("unknown traversal mode '{other}'"))),
        }
    }
}

/// Main configuration struct for an export run
#[derive(Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Bearer token for the help-center API. Never serialized.
    #[serde(skip)]
    pub(crate) api_token: String,

    /// Root of the output tree (`articles/`, `images/`, summary file)
    pub(crate) output_dir: PathBuf,

    /// API root, without trailing slash
    pub(crate) api_url: String,

    pub(crate) mode: TraversalMode,

    /// Pause enforced between successive API calls
    pub(crate) request_delay_ms: u64,

    /// Timeout for one media download
    pub(crate) media_timeout_secs: u64,

    /// Timeout for one API call
    pub(crate) api_timeout_secs: u64,

    /// Largest media body accepted
    pub(crate) max_media_size: usize,

    /// `per_page` for listing endpoints
    pub(crate) page_size: usize,

    /// Prefix of the front-matter id key (`<source_key>_id`)
    pub(crate) source_key: String,

    /// Prefix each media file name with the owning article id
    ///
    /// Off by default: all media share one flat namespace and identical
    /// sanitized names overwrite each other.
    pub(crate) namespace_media: bool,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("api_token", &"<redacted>")
            .field("output_dir", &self.output_dir)
            .field("api_url", &self.api_url)
            .field("mode", &self.mode)
            .field("request_delay_ms", &self.request_delay_ms)
            .field("media_timeout_secs", &self.media_timeout_secs)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("max_media_size", &self.max_media_size)
            .field("page_size", &self.page_size)
            .field("source_key", &self.source_key)
            .field("namespace_media", &self.namespace_media)
            .finish()
    }
}
