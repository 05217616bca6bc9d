//! Test utilities shared by the integration suites

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use helpcenter_export::error::{ExportError, ExportResult};
use helpcenter_export::help_center::{ArticleSummary, Collection, Section};
use helpcenter_export::{ContentSource, ExportConfig, RemoteDocument};
use tempfile::TempDir;

/// Smallest valid PNG, used as the body of mocked image responses
#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89,
];

/// Config pointing at `api_url`, writing into `dir`, with pacing disabled
#[allow(dead_code)]
pub fn test_config(dir: &TempDir, api_url: &str) -> ExportConfig {
    ExportConfig::builder()
        .api_token("test-token")
        .output_dir(dir.path())
        .api_url(api_url)
        .request_delay(std::time::Duration::ZERO)
        .build()
        .expect("valid test config")
}

#[allow(dead_code)]
pub fn document(id: &str, title: &str, body: &str) -> RemoteDocument {
    RemoteDocument {
        id: id.to_string(),
        title: Some(title.to_string()),
        body: Some(body.to_string()),
        url: Some(format!("https://help.example.com/articles/{id}")),
        ..RemoteDocument::default()
    }
}

/// In-memory [`ContentSource`]. Articles listed in `failing` return a fetch
/// error when fetched.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeSource {
    pub collections: Vec<Collection>,
    pub sections: Vec<Section>,
    pub summaries: Vec<ArticleSummary>,
    pub documents: HashMap<String, RemoteDocument>,
    pub failing: Vec<String>,
    pub fetched: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn with_documents(documents: Vec<RemoteDocument>) -> Self {
        let summaries = documents
            .iter()
            .map(|d| ArticleSummary {
                id: d.id.clone(),
                title: d.title.clone(),
                parent_id: d.parent_id.clone(),
            })
            .collect();
        Self {
            summaries,
            documents: documents.into_iter().map(|d| (d.id.clone(), d)).collect(),
            ..Self::default()
        }
    }

    pub fn fail(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }

    pub fn fetched_ids(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn list_articles(&self) -> ExportResult<Vec<ArticleSummary>> {
        Ok(self.summaries.clone())
    }

    async fn list_collections(&self) -> ExportResult<Vec<Collection>> {
        Ok(self.collections.clone())
    }

    async fn list_sections(&self) -> ExportResult<Vec<Section>> {
        Ok(self.sections.clone())
    }

    async fn fetch_article(&self, id: &str) -> ExportResult<RemoteDocument> {
        self.fetched.lock().unwrap().push(id.to_string());
        if self.failing.iter().any(|f| f == id) {
            return Err(ExportError::Fetch {
                url: format!("fake://articles/{id}"),
                reason: "status 500 Internal Server Error".to_string(),
            });
        }
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| ExportError::Fetch {
                url: format!("fake://articles/{id}"),
                reason: "status 404 Not Found".to_string(),
            })
    }
}
