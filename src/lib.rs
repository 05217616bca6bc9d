pub mod config;
pub mod content_saver;
pub mod error;
pub mod export;
pub mod help_center;
pub mod media;
pub mod utils;

pub use config::{ExportConfig, TraversalMode};
pub use content_saver::{ArticleRecord, TranscodedDocument, Transcoder, render_markdown};
pub use error::{ExportError, ExportResult};
pub use export::{ExportReport, Exporter};
pub use help_center::{ContentSource, HelpCenterClient, RemoteDocument};
pub use media::{LocalizedMedia, MediaLocalizer};

/// Run a complete export against the live help-center API.
///
/// # Errors
///
/// Run-level failures only; see [`Exporter::run`].
pub async fn export(config: ExportConfig) -> ExportResult<ExportReport> {
    let http = help_center::build_http_client(&config)?;
    let source = HelpCenterClient::new(http.clone(), &config);
    let localizer = MediaLocalizer::from_config(http, &config);
    Exporter::new(source, localizer, config).run().await
}
