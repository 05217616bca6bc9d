//! Help-center API access
//!
//! [`ContentSource`] is the seam between the exporter and the remote
//! service; [`HelpCenterClient`] is the HTTP implementation.

mod client;
mod pacer;
mod types;

use async_trait::async_trait;

use crate::error::ExportResult;

pub use client::{HelpCenterClient, build_http_client};
pub use pacer::RequestPacer;
pub use types::{ArticleSummary, Collection, RemoteDocument, Section};

/// Where articles and their taxonomy come from
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Every article, in listing order
    async fn list_articles(&self) -> ExportResult<Vec<ArticleSummary>>;

    async fn list_collections(&self) -> ExportResult<Vec<Collection>>;

    async fn list_sections(&self) -> ExportResult<Vec<Section>>;

    /// Full record, including the HTML body
    async fn fetch_article(&self, id: &str) -> ExportResult<RemoteDocument>;
}
