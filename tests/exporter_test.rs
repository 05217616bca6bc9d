//! End-to-end export runs against an in-memory content source

use helpcenter_export::help_center::{ArticleSummary, Collection, Section};
use helpcenter_export::media::MediaLocalizer;
use helpcenter_export::{ArticleRecord, ExportConfig, Exporter, TraversalMode};
use tempfile::TempDir;

mod common;
use common::{FakeSource, PNG_BYTES, document, test_config};

fn exporter(source: FakeSource, config: ExportConfig) -> Exporter<FakeSource> {
    let localizer = MediaLocalizer::from_config(reqwest::Client::new(), &config);
    Exporter::new(source, localizer, config)
}

fn read_summary(config: &ExportConfig) -> Vec<ArticleRecord> {
    let raw = std::fs::read_to_string(config.summary_path()).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn assert_send<T: Send>(_: &T) {}

#[test]
fn export_futures_can_be_spawned() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, "https://api.example.com");

    let run = helpcenter_export::export(config.clone());
    assert_send(&run);

    let exporter = exporter(FakeSource::default(), config);
    let run = exporter.run();
    assert_send(&run);
}

#[tokio::test]
async fn export_runs_on_a_spawned_task() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, "https://api.example.com");
    let source = FakeSource::with_documents(vec![document("1", "Spawned", "<p>ok</p>")]);
    let exporter = exporter(source, config.clone());

    let report = tokio::spawn(async move { exporter.run().await })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.exported, 1);
}

#[tokio::test]
async fn one_failing_document_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, "https://api.example.com");
    let source = FakeSource::with_documents(vec![
        document("1", "First", "<p>one</p>"),
        document("2", "Second", "<p>two</p>"),
        document("3", "Third", "<p>three</p>"),
    ])
    .fail("2");

    let exporter = exporter(source, config.clone());
    let report = exporter.run().await.unwrap();

    assert_eq!(report.discovered, 3);
    assert_eq!(report.exported, 2);
    assert_eq!(report.failed, 1);

    let articles = config.articles_dir().join("General").join("Uncategorized");
    assert!(articles.join("First.md").exists());
    assert!(!articles.join("Second.md").exists());
    assert!(articles.join("Third.md").exists());

    let summary = read_summary(&config);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].title, "First");
    assert_eq!(summary[1].title, "Third");
}

#[tokio::test]
async fn artifact_carries_front_matter_and_body() {
    let dir = TempDir::new().unwrap();
    let config = ExportConfig::builder()
        .api_token("t")
        .output_dir(dir.path())
        .source_key("zendesk")
        .request_delay(std::time::Duration::ZERO)
        .build()
        .unwrap();

    let mut doc = document(
        "77",
        "How to \"log in\"",
        "<h1>Log in</h1><p>Click <em>Sign in</em>.</p>",
    );
    doc.collection_name = Some("Account".to_string());
    doc.section_name = Some("Access/Login".to_string());

    let report = exporter(FakeSource::with_documents(vec![doc]), config.clone())
        .run()
        .await
        .unwrap();
    assert_eq!(report.exported, 1);

    let path = config
        .articles_dir()
        .join("Account")
        .join("Access_Login")
        .join("How_to__log_in_.md");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "---\n\
         title: \"How to \\\"log in\\\"\"\n\
         collection: \"Account\"\n\
         section: \"Access/Login\"\n\
         zendesk_id: \"77\"\n\
         url: \"https://help.example.com/articles/77\"\n\
         ---\n\
         \n\
         # Log in\n\
         \n\
         Click *Sign in*.\n\
         \n"
    );
    assert_eq!(report.records[0].path, path);
}

#[tokio::test]
async fn hierarchical_mode_labels_from_traversal() {
    let dir = TempDir::new().unwrap();
    let config = ExportConfig::builder()
        .api_token("t")
        .output_dir(dir.path())
        .mode(TraversalMode::Hierarchical)
        .request_delay(std::time::Duration::ZERO)
        .build()
        .unwrap();

    let mut in_section = document("10", "Invoices explained", "<p>x</p>");
    in_section.parent_id = Some("s1".to_string());
    // Labels on the record are ignored in this mode
    in_section.collection_name = Some("Ignored".to_string());
    let mut loose = document("11", "Loose", "<p>y</p>");
    loose.parent_id = None;

    let mut source = FakeSource::with_documents(vec![loose, in_section]);
    source.collections = vec![Collection {
        id: "c1".into(),
        name: "Billing".into(),
    }];
    source.sections = vec![Section {
        id: "s1".into(),
        name: "Invoices".into(),
        parent_id: Some("c1".into()),
    }];

    let exporter = exporter(source, config.clone());
    exporter.run().await.unwrap();

    let articles = config.articles_dir();
    assert!(articles.join("Billing/Invoices/Invoices_explained.md").exists());
    assert!(articles.join("General/Uncategorized/Loose.md").exists());
    assert!(!articles.join("Ignored").exists());

    let summary = read_summary(&config);
    let titles: Vec<&str> = summary.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Invoices explained", "Loose"]);
}

#[tokio::test]
async fn images_land_in_shared_directory_and_summary() {
    let mut server = mockito::Server::new_async().await;
    let _img = server
        .mock("GET", "/files/chart.png")
        .with_status(200)
        .with_body(PNG_BYTES)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, "https://api.example.com");
    let body = format!(r#"<p><img src="{}/files/chart.png"></p>"#, server.url());
    let source = FakeSource::with_documents(vec![document("5", "Charts", &body)]);

    let report = exporter(source, config.clone()).run().await.unwrap();

    assert_eq!(report.media_localized, 1);
    assert!(config.images_dir().join("chart.png").exists());
    assert_eq!(
        read_summary(&config)[0].images,
        vec![config.images_dir().join("chart.png")]
    );
}

#[tokio::test]
async fn namespaced_media_are_prefixed_with_article_id() {
    let mut server = mockito::Server::new_async().await;
    let _img = server
        .mock("GET", "/files/chart.png")
        .with_status(200)
        .with_body(PNG_BYTES)
        .expect(2)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = ExportConfig::builder()
        .api_token("t")
        .output_dir(dir.path())
        .namespace_media(true)
        .request_delay(std::time::Duration::ZERO)
        .build()
        .unwrap();
    let body = format!(r#"<img src="{}/files/chart.png">"#, server.url());
    let source = FakeSource::with_documents(vec![
        document("a1", "One", &body),
        document("a2", "Two", &body),
    ]);

    exporter(source, config.clone()).run().await.unwrap();

    assert!(config.images_dir().join("a1_chart.png").exists());
    assert!(config.images_dir().join("a2_chart.png").exists());
}

#[tokio::test]
async fn empty_listing_still_writes_summary() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, "https://api.example.com");

    let report = exporter(FakeSource::default(), config.clone())
        .run()
        .await
        .unwrap();

    assert_eq!(report.exported, 0);
    assert!(read_summary(&config).is_empty());
    assert!(config.images_dir().is_dir());
}

#[tokio::test]
async fn missing_titles_fall_back() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir, "https://api.example.com");

    let mut untitled = document("9", "", "<p>body</p>");
    untitled.title = None;
    let mut source = FakeSource::with_documents(vec![untitled]);
    source.summaries = vec![ArticleSummary {
        id: "9".into(),
        title: Some("From listing".into()),
        parent_id: None,
    }];

    let exporter = exporter(source, config.clone());
    exporter.run().await.unwrap();

    assert!(config
        .articles_dir()
        .join("General/Uncategorized/From_listing.md")
        .exists());
}
