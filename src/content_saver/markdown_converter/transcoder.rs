//! HTML body → Markdown, with media localized along the way
//!
//! Three steps keep the returned future `Send`: the `<img>` sources are read
//! from a throwaway parse, the downloads are awaited with no DOM alive, and a
//! second parse rewrites each `src` before rendering. Both parses visit the
//! images in the same document order, so a rewritten reference can never
//! drift from the media list.

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::LazyLock;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Node, NodeData, RcDom};
use serde::Serialize;

use crate::media::{LocalizedMedia, MediaLocalizer, derive_media_name};
use crate::utils::sanitize_filename;

use super::dom_walker::{finalize_markdown, walk_node};
use super::element_handler::ElementHandlers;
use super::node_util::{collect_elements, get_attr, set_attr};

static HANDLERS: LazyLock<ElementHandlers> = LazyLock::new(ElementHandlers::new);

/// Result of transcoding one body
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscodedDocument {
    pub markdown: String,
    /// Media rewritten to local files, in encounter order. One entry per
    /// rewritten `<img>`.
    pub media: Vec<LocalizedMedia>,
    /// Remote URLs left in place because they could not be localized
    pub omitted_media: Vec<String>,
}

impl TranscodedDocument {
    /// Local file names referenced by the Markdown
    pub fn media_names(&self) -> Vec<String> {
        self.media.iter().map(|m| m.file_name.clone()).collect()
    }

    /// Paths the localized media were written to
    pub fn media_paths(&self) -> Vec<PathBuf> {
        self.media.iter().map(|m| m.path.clone()).collect()
    }
}

pub struct Transcoder<'a> {
    localizer: &'a MediaLocalizer,
    media_prefix: Option<String>,
}

impl<'a> Transcoder<'a> {
    pub fn new(localizer: &'a MediaLocalizer) -> Self {
        Self {
            localizer,
            media_prefix: None,
        }
    }

    /// Prefix every media file name with `prefix` (sanitized), keeping
    /// same-named images from different documents apart.
    #[must_use]
    pub fn with_media_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        let prefix = sanitize_filename(prefix.as_ref());
        self.media_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Localize media in `raw` and render it to Markdown.
    ///
    /// Never fails: the parser is tolerant and an image that cannot be
    /// localized keeps its remote URL.
    pub async fn transcode(&self, raw: &str) -> TranscodedDocument {
        let mut media = Vec::new();
        let mut omitted_media = Vec::new();
        let mut localized: HashMap<String, LocalizedMedia> = HashMap::new();

        for src in image_sources(raw) {
            if let Some(existing) = localized.get(&src) {
                media.push(existing.clone());
                continue;
            }

            let suggested = self
                .media_prefix
                .as_ref()
                .map(|prefix| format!("{prefix}_{}", derive_media_name(&src)));
            match self.localizer.localize(&src, suggested.as_deref()).await {
                Ok(item) => {
                    localized.insert(src, item.clone());
                    media.push(item);
                }
                Err(e) => {
                    log::warn!("Keeping remote image {src}: {e}");
                    omitted_media.push(src);
                }
            }
        }

        TranscodedDocument {
            markdown: render_localized(raw, &localized),
            media,
            omitted_media,
        }
    }
}

/// Render an HTML body to Markdown without touching its media.
pub fn render_markdown(html: &str) -> String {
    render_dom(&parse(html))
}

fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

fn render_dom(dom: &RcDom) -> String {
    let mut buffer = String::new();
    walk_node(&dom.document, &mut buffer, &HANDLERS);
    finalize_markdown(&buffer)
}

/// Non-blank `<img>` sources in document order, duplicates included
fn image_sources(raw: &str) -> Vec<String> {
    let dom = parse(raw);
    collect_elements(&dom.document, "img")
        .iter()
        .filter_map(img_src)
        .collect()
}

/// Parse `raw` again, point every localized `<img>` at its local file and
/// render the result.
fn render_localized(raw: &str, localized: &HashMap<String, LocalizedMedia>) -> String {
    let dom = parse(raw);
    if !localized.is_empty() {
        for img in collect_elements(&dom.document, "img") {
            if let Some(item) = img_src(&img).and_then(|src| localized.get(&src)) {
                set_attr(&img, "src", &item.file_name);
            }
        }
    }
    render_dom(&dom)
}

fn img_src(img: &Rc<Node>) -> Option<String> {
    let NodeData::Element { ref attrs, .. } = img.data else {
        return None;
    };
    let src = get_attr(&attrs.borrow(), "src")?;
    let src = src.trim();
    (!src.is_empty()).then(|| src.to_string())
}
