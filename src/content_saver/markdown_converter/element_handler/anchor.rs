use super::super::node_util::{escape_link_destination, get_attr};
use super::{Element, Handlers};

/// `<a href="u">text</a>` -> `[text](u)`.
///
/// An anchor without `href` is unwrapped to its content. An anchor with no
/// visible content uses its destination as the link text.
pub(super) fn anchor_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    let content = handlers.walk_children(element.node);

    let Some(href) = get_attr(element.attrs, "href").filter(|h| !h.trim().is_empty()) else {
        return Some(content);
    };
    let href = href.trim();

    // Whitespace around the text belongs outside the brackets
    let text = content.trim();
    let leading = if content.starts_with(char::is_whitespace) { " " } else { "" };
    let trailing = if content.ends_with(char::is_whitespace) && !text.is_empty() {
        " "
    } else {
        ""
    };
    let text = if text.is_empty() { href } else { text };

    Some(format!(
        "{leading}[{text}]({}){trailing}",
        escape_link_destination(href)
    ))
}
