//! The batch driver
//!
//! Documents are processed strictly one after another: fetch, transcode,
//! assemble, write. A failure is logged and skips that document only; the
//! run summary is written once at the end.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{ExportConfig, TraversalMode};
use crate::content_saver::{
    ArticleRecord, FrontMatter, Transcoder, assemble_article, save_run_summary, write_artifact,
};
use crate::error::{ExportError, ExportResult};
use crate::help_center::ContentSource;
use crate::media::MediaLocalizer;
use crate::utils::{DEFAULT_COLLECTION_LABEL, DEFAULT_SECTION_LABEL, DEFAULT_TITLE};

use super::plan::{PendingArticle, flat_plan, hierarchical_plan, label_or};

/// Outcome of one run
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Articles discovered by the traversal
    pub discovered: usize,
    /// Articles written to disk
    pub exported: usize,
    pub failed: usize,
    pub media_localized: usize,
    /// Images left pointing at their remote URL
    pub media_omitted: usize,
    pub records: Vec<ArticleRecord>,
}

pub struct Exporter<S> {
    source: S,
    localizer: MediaLocalizer,
    config: ExportConfig,
}

impl<S: ContentSource> Exporter<S> {
    pub fn new(source: S, localizer: MediaLocalizer, config: ExportConfig) -> Self {
        Self {
            source,
            localizer,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export every article the traversal discovers.
    ///
    /// # Errors
    ///
    /// Only run-level failures: the output tree or the summary file cannot
    /// be written, or listing fails outright. Per-article errors are counted
    /// in the report instead.
    pub async fn run(&self) -> ExportResult<ExportReport> {
        let started_at = Utc::now();
        log::info!(
            "Starting {} export into {}",
            self.config.mode(),
            self.config.output_dir().display()
        );

        for dir in [self.config.articles_dir(), self.config.images_dir()] {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| ExportError::write(&dir, e))?;
        }

        let plan = self.plan().await?;
        log::info!("Found {} articles", plan.len());

        let mut records = Vec::with_capacity(plan.len());
        let mut failed = 0usize;
        let mut media_localized = 0usize;
        let mut media_omitted = 0usize;

        for (index, pending) in plan.iter().enumerate() {
            log::info!(
                "[{}/{}] Processing article {}",
                index + 1,
                plan.len(),
                pending.id
            );

            match self.export_article(pending).await {
                Ok(outcome) => {
                    media_localized += outcome.record.images.len();
                    media_omitted += outcome.omitted_media;
                    records.push(outcome.record);
                }
                Err(e) => {
                    failed += 1;
                    log::warn!("Skipping article {} ({}): {e}", pending.id, e.kind());
                }
            }
        }

        save_run_summary(&self.config.summary_path(), &records).await?;

        let finished_at = Utc::now();
        log::info!(
            "Completed at {}: exported {} of {} articles ({} failed, {} images) in {}s",
            finished_at.to_rfc3339(),
            records.len(),
            plan.len(),
            failed,
            media_localized,
            (finished_at - started_at).num_seconds()
        );

        Ok(ExportReport {
            started_at,
            finished_at,
            discovered: plan.len(),
            exported: records.len(),
            failed,
            media_localized,
            media_omitted,
            records,
        })
    }

    async fn plan(&self) -> ExportResult<Vec<PendingArticle>> {
        match self.config.mode() {
            TraversalMode::Flat => {
                let articles = self.source.list_articles().await?;
                Ok(flat_plan(&articles))
            }
            TraversalMode::Hierarchical => {
                let collections = self.source.list_collections().await?;
                let sections = self.source.list_sections().await?;
                let articles = self.source.list_articles().await?;
                log::info!(
                    "Found {} collections and {} sections",
                    collections.len(),
                    sections.len()
                );
                Ok(hierarchical_plan(&collections, &sections, &articles))
            }
        }
    }

    async fn export_article(&self, pending: &PendingArticle) -> ExportResult<ArticleOutcome> {
        let document = self.source.fetch_article(&pending.id).await?;

        let title = non_blank(document.title.as_deref())
            .or_else(|| non_blank(pending.title_hint.as_deref()))
            .unwrap_or(DEFAULT_TITLE);
        let collection = pending
            .collection
            .as_deref()
            .or(document.collection_name.as_deref())
            .map_or(DEFAULT_COLLECTION_LABEL, |c| label_or(c, DEFAULT_COLLECTION_LABEL));
        let section = pending
            .section
            .as_deref()
            .or(document.section_name.as_deref())
            .map_or(DEFAULT_SECTION_LABEL, |s| label_or(s, DEFAULT_SECTION_LABEL));
        let url = document.url.clone().unwrap_or_default();

        log::debug!("Article {}: {collection} / {section} / {title}", document.id);

        let mut transcoder = Transcoder::new(&self.localizer);
        if self.config.namespace_media() {
            transcoder = transcoder.with_media_prefix(&document.id);
        }
        let transcoded = transcoder
            .transcode(document.body.as_deref().unwrap_or_default())
            .await;

        log::info!(
            "Converted '{}' with {} images ({} kept remote)",
            title,
            transcoded.media.len(),
            transcoded.omitted_media.len()
        );

        let front_matter = FrontMatter {
            title: title.to_string(),
            collection: collection.to_string(),
            section: section.to_string(),
            source_id: document.id.clone(),
            url: url.clone(),
        };
        let artifact = assemble_article(
            &self.config.articles_dir(),
            self.config.source_key(),
            &front_matter,
            &transcoded.markdown,
        );
        write_artifact(&artifact).await?;

        Ok(ArticleOutcome {
            record: ArticleRecord {
                path: artifact.path,
                title: title.to_string(),
                images: transcoded.media_paths(),
                url,
            },
            omitted_media: transcoded.omitted_media.len(),
        })
    }
}

struct ArticleOutcome {
    record: ArticleRecord,
    omitted_media: usize,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
