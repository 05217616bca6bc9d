//! HTTP implementation of [`ContentSource`] for Intercom-compatible APIs
//!
//! Listing endpoints are paginated with `page`/`per_page`; a page shorter
//! than `per_page` is the last one. Every call goes through the shared
//! [`RequestPacer`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::utils::{USER_AGENT, join_endpoint};

use super::ContentSource;
use super::pacer::RequestPacer;
use super::types::{ArticleSummary, Collection, Page, RemoteDocument, Section};

const ARTICLES_PATH: &str = "articles";
const COLLECTIONS_PATH: &str = "help_center/collections";
const SECTIONS_PATH: &str = "help_center/sections";

/// Shared HTTP client for API calls and media downloads.
///
/// # Errors
///
/// [`ExportError::Config`] if the TLS backend cannot be initialized.
pub fn build_http_client(config: &ExportConfig) -> ExportResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.api_timeout())
        .build()
        .map_err(|e| ExportError::Config(format!("failed to build HTTP client: {e}")))
}

#[derive(Debug)]
pub struct HelpCenterClient {
    http: Client,
    base_url: String,
    token: String,
    page_size: usize,
    pacer: RequestPacer,
}

impl HelpCenterClient {
    pub fn new(http: Client, config: &ExportConfig) -> Self {
        Self {
            http,
            base_url: config.api_url().to_string(),
            token: config.api_token().to_string(),
            page_size: config.page_size(),
            pacer: RequestPacer::new(config.request_delay()),
        }
    }

    /// GET `url` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> ExportResult<T> {
        self.pacer.wait().await;

        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ExportError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::fetch(url, format!("status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExportError::fetch(url, e))?;

        serde_json::from_str(&body).map_err(|e| ExportError::parse(url, e))
    }

    /// Collect every page of a listing endpoint.
    ///
    /// A page that fails ends the listing; whatever was gathered before it is
    /// returned.
    async fn paginate<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        let url = join_endpoint(&self.base_url, path);
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            let query = [
                ("page", page.to_string()),
                ("per_page", self.page_size.to_string()),
            ];
            match self.get_json::<Page<T>>(&url, &query).await {
                Ok(batch) => {
                    let count = batch.data.len();
                    items.extend(batch.data);
                    log::debug!("{path}: page {page} returned {count} items");
                    if count < self.page_size {
                        break;
                    }
                    page += 1;
                }
                Err(e) => {
                    log::warn!(
                        "Stopping {path} listing at page {page} ({}): {e}",
                        e.kind()
                    );
                    break;
                }
            }
        }

        items
    }
}

#[async_trait]
impl ContentSource for HelpCenterClient {
    async fn list_articles(&self) -> ExportResult<Vec<ArticleSummary>> {
        Ok(self.paginate(ARTICLES_PATH).await)
    }

    async fn list_collections(&self) -> ExportResult<Vec<Collection>> {
        Ok(self.paginate(COLLECTIONS_PATH).await)
    }

    async fn list_sections(&self) -> ExportResult<Vec<Section>> {
        Ok(self.paginate(SECTIONS_PATH).await)
    }

    async fn fetch_article(&self, id: &str) -> ExportResult<RemoteDocument> {
        let url = join_endpoint(&self.base_url, &format!("{ARTICLES_PATH}/{id}"));
        self.get_json(&url, &[]).await
    }
}
