//! HTML to Markdown conversion
//!
//! A tolerant html5ever parse feeds a tree-walking renderer: each element is
//! dispatched through a tag → handler registry and handlers recurse into
//! their children. [`Transcoder`] adds the media pass in front of rendering.

mod dom_walker;
mod element_handler;
mod node_util;
pub mod transcoder;

pub use transcoder::{TranscodedDocument, Transcoder, render_markdown};
