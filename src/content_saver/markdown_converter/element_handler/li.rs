use super::{Element, Handlers};

const NESTED_INDENT: &str = "  ";

/// `<li>` -> `- item`. Continuation lines (nested lists, extra paragraphs)
/// are indented under the bullet. Ordered lists use the same bullet.
pub(super) fn list_item_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    let content = handlers.walk_children(element.node);
    let content = content.trim_matches(|c: char| c == '\n' || c == ' ');
    if content.is_empty() {
        return None;
    }

    let mut lines = content.split('\n');
    let mut item = format!("- {}", lines.next().unwrap_or_default());
    for line in lines {
        item.push('\n');
        if !line.trim().is_empty() {
            item.push_str(NESTED_INDENT);
            item.push_str(line);
        }
    }
    item.push('\n');

    Some(item)
}
