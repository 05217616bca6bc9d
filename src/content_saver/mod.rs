//! Turning fetched articles into files on disk

mod json_saver;
pub mod markdown_converter;
mod markdown_saver;

pub use json_saver::{ArticleRecord, save_run_summary};
pub use markdown_converter::{TranscodedDocument, Transcoder, render_markdown};
pub use markdown_saver::{
    ArticleArtifact, FrontMatter, article_path, assemble_article, write_artifact,
};
