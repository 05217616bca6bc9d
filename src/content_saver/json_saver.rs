//! Run summary (`articles_metadata.json`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// One exported article as listed in the run summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub path: PathBuf,
    pub title: String,
    /// Paths of the localized media the article references
    pub images: Vec<PathBuf>,
    pub url: String,
}

/// Write the summary as a pretty-printed JSON array. Called once, after
/// every document has been processed.
///
/// # Errors
///
/// [`ExportError::Parse`] if serialization fails, [`ExportError::Write`] if
/// the file cannot be written.
pub async fn save_run_summary(path: &Path, records: &[ArticleRecord]) -> ExportResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| ExportError::parse("run summary", e))?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::write(parent, e))?;
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|e| ExportError::write(path, e))?;

    log::info!("Wrote summary of {} articles to {}", records.len(), path.display());
    Ok(())
}
