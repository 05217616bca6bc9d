//! Document assembly: front matter, output path, persistence
//!
//! An article artifact is the transcoded Markdown body behind a YAML front
//! matter block. Its location is a pure function of the taxonomy labels and
//! the title, so re-running an export overwrites the same files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ExportError, ExportResult};
use crate::utils::{DEFAULT_TITLE, MAX_PATH_COMPONENT_CHARS, safe_truncate_chars, sanitize_filename};

/// Metadata written ahead of an article body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub title: String,
    pub collection: String,
    pub section: String,
    pub source_id: String,
    pub url: String,
}

impl FrontMatter {
    /// Render the `---` delimited block. The id field is named
    /// `{source_key}_id`.
    #[must_use]
    pub fn render(&self, source_key: &str) -> String {
        format!(
            "---\n\
             title: \"{}\"\n\
             collection: \"{}\"\n\
             section: \"{}\"\n\
             {source_key}_id: \"{}\"\n\
             url: \"{}\"\n\
             ---\n",
            escape_yaml(&self.title),
            escape_yaml(&self.collection),
            escape_yaml(&self.section),
            escape_yaml(&self.source_id),
            escape_yaml(&self.url),
        )
    }
}

/// One article ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleArtifact {
    pub path: PathBuf,
    pub contents: String,
}

/// Combine front matter and body into an artifact located under
/// `articles_dir`.
#[must_use]
pub fn assemble_article(
    articles_dir: &Path,
    source_key: &str,
    front_matter: &FrontMatter,
    body: &str,
) -> ArticleArtifact {
    let path = article_path(
        articles_dir,
        &front_matter.collection,
        &front_matter.section,
        &front_matter.title,
    );
    let contents = format!("{}\n{body}", front_matter.render(source_key));
    ArticleArtifact { path, contents }
}

/// `<articles_dir>/<collection>/<section>/<title>.md`, every label sanitized.
#[must_use]
pub fn article_path(articles_dir: &Path, collection: &str, section: &str, title: &str) -> PathBuf {
    let mut file_name = path_component(title, DEFAULT_TITLE);
    file_name.push_str(".md");

    articles_dir
        .join(path_component(collection, "_"))
        .join(path_component(section, "_"))
        .join(file_name)
}

/// Write the artifact, creating its directories first.
///
/// # Errors
///
/// [`ExportError::Write`] if a directory or the file cannot be written.
pub async fn write_artifact(artifact: &ArticleArtifact) -> ExportResult<()> {
    if let Some(parent) = artifact.path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::write(parent, e))?;
    }

    tokio::fs::write(&artifact.path, artifact.contents.as_bytes())
        .await
        .map_err(|e| ExportError::write(&artifact.path, e))?;

    log::debug!(
        "Saved article to {} ({} bytes)",
        artifact.path.display(),
        artifact.contents.len()
    );
    Ok(())
}

/// Sanitized, length-bounded label. Labels that would sanitize to nothing,
/// or to `.`/`..`, fall back to `fallback`.
fn path_component(label: &str, fallback: &str) -> String {
    let sanitized = sanitize_filename(label.trim());
    let component = safe_truncate_chars(&sanitized, MAX_PATH_COMPONENT_CHARS);
    if component.is_empty() || component.chars().all(|c| c == '.') {
        sanitize_filename(fallback)
    } else {
        component.to_string()
    }
}

fn escape_yaml(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ")
}
