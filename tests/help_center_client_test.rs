//! API client behaviour against a mock help-center server

use helpcenter_export::error::ExportError;
use helpcenter_export::{ContentSource, ExportConfig, HelpCenterClient};
use mockito::Matcher;
use serde_json::json;
use tempfile::TempDir;

fn client(dir: &TempDir, server: &mockito::ServerGuard, page_size: usize) -> HelpCenterClient {
    let config = ExportConfig::builder()
        .api_token("secret-token")
        .output_dir(dir.path())
        .api_url(server.url())
        .page_size(page_size)
        .request_delay(std::time::Duration::ZERO)
        .build()
        .unwrap();
    HelpCenterClient::new(reqwest::Client::new(), &config)
}

fn page_query(page: usize, per_page: usize) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("per_page".into(), per_page.to_string()),
    ])
}

#[tokio::test]
async fn articles_are_paginated_until_short_page() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/articles")
        .match_query(page_query(1, 2))
        .match_header("authorization", "Bearer secret-token")
        .match_header("accept", "application/json")
        .with_body(json!({"data": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]}).to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", "/articles")
        .match_query(page_query(2, 2))
        .with_body(json!({"data": [{"id": "3", "title": "C", "parent_id": 9}]}).to_string())
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let articles = client(&dir, &server, 2).list_articles().await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(articles[2].parent_id.as_deref(), Some("9"));
}

#[tokio::test]
async fn failing_page_keeps_what_was_collected() {
    let mut server = mockito::Server::new_async().await;
    let _first = server
        .mock("GET", "/help_center/collections")
        .match_query(page_query(1, 1))
        .with_body(json!({"data": [{"id": 1, "name": "Billing"}]}).to_string())
        .create_async()
        .await;
    let _second = server
        .mock("GET", "/help_center/collections")
        .match_query(page_query(2, 1))
        .with_status(500)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let collections = client(&dir, &server, 1).list_collections().await.unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].name, "Billing");
}

#[tokio::test]
async fn sections_listing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/help_center/sections")
        .match_query(Matcher::Any)
        .with_body(json!({"data": [{"id": 5, "name": "Invoices", "parent_id": 1}]}).to_string())
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let sections = client(&dir, &server, 50).list_sections().await.unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].parent_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn fetch_article_decodes_record() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/articles/42")
        .with_body(
            json!({
                "id": 42,
                "title": "Reset password",
                "body": "<p>Steps</p>",
                "url": "https://help.example.com/42",
                "parent_id": null,
                "section_name": "Security"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let doc = client(&dir, &server, 50).fetch_article("42").await.unwrap();

    assert_eq!(doc.id, "42");
    assert_eq!(doc.body.as_deref(), Some("<p>Steps</p>"));
    assert_eq!(doc.section_name.as_deref(), Some("Security"));
    assert_eq!(doc.collection_name, None);
}

#[tokio::test]
async fn fetch_errors_are_classified() {
    let mut server = mockito::Server::new_async().await;
    let _missing = server
        .mock("GET", "/articles/1")
        .with_status(404)
        .create_async()
        .await;
    let _garbled = server
        .mock("GET", "/articles/2")
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let client = client(&dir, &server, 50);

    let err = client.fetch_article("1").await.unwrap_err();
    assert!(matches!(err, ExportError::Fetch { .. }), "got {err:?}");

    let err = client.fetch_article("2").await.unwrap_err();
    assert!(matches!(err, ExportError::Parse { .. }), "got {err:?}");
}
