// helpcenter-export: dump a help center to Markdown with local images.
//
// The API token is read from INTERCOM_API_TOKEN, either in the environment
// or in a .env file in the working directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use helpcenter_export::utils::{
    API_TOKEN_ENV, DEFAULT_API_URL, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_DELAY, DEFAULT_SOURCE_KEY,
};
use helpcenter_export::{ExportConfig, TraversalMode};

#[derive(Parser, Debug)]
#[command(
    name = "helpcenter-export",
    version,
    about = "Export help-center articles to Markdown with localized images"
)]
struct Cli {
    /// Root of the output tree
    #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Traversal mode: flat or hierarchical
    #[arg(long, default_value = "flat")]
    mode: TraversalMode,

    /// API root
    #[arg(long, env = "HELPCENTER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Pause between API calls, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Prefix of the id field in front matter (`<key>_id`)
    #[arg(long, default_value = DEFAULT_SOURCE_KEY)]
    source_key: String,

    /// Prefix image file names with the article id
    #[arg(long)]
    namespace_media: bool,

    /// Log filter, e.g. `debug` or `helpcenter_export=trace` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = &cli.log_level {
        logger.parse_filters(level);
    }
    logger.init();

    let token = std::env::var(API_TOKEN_ENV).with_context(|| {
        format!("{API_TOKEN_ENV} is not set; export it or put it in a .env file")
    })?;

    let config = ExportConfig::builder()
        .api_token(token)
        .output_dir(&cli.output)
        .api_url(&cli.api_url)
        .mode(cli.mode)
        .request_delay(Duration::from_millis(cli.delay_ms))
        .source_key(&cli.source_key)
        .namespace_media(cli.namespace_media)
        .build()
        .context("invalid configuration")?;

    log::info!("Output directory: {}", config.output_dir().display());

    let report = helpcenter_export::export(config)
        .await
        .context("export failed")?;

    println!(
        "Completed! Exported {} of {} articles ({} images). Output in '{}'.",
        report.exported,
        report.discovered,
        report.media_localized,
        cli.output.display()
    );
    Ok(())
}
