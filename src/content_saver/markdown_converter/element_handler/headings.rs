//! Handler for heading elements (h1-h6)

use super::{Element, Handlers};

/// Converts HTML headings to ATX-style Markdown headings:
/// - `<h1>Title</h1>` -> `# Title`
/// - `<h2>Section</h2>` -> `## Section`
///
/// A heading is one line, so line breaks inside it become spaces.
pub(super) fn headings_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    // element.tag is "h1" .. "h6"
    let level = element
        .tag
        .chars()
        .nth(1)
        .and_then(|c| c.to_digit(10))
        .unwrap_or(1) as usize;

    let content = handlers.walk_children(element.node);
    let content = content.split_whitespace().collect::<Vec<_>>().join(" ");

    if content.is_empty() {
        return None;
    }

    Some(format!("\n\n{} {}\n\n", "#".repeat(level), content))
}
