use super::super::node_util::parent_tag_name_equals;
use super::{Element, Handlers};

/// `<ul>` and `<ol>`: the items render themselves, the list only separates
/// itself from surrounding blocks. A list nested in an item hangs directly
/// below the item's text.
pub(super) fn list_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    let content = handlers.walk_children(element.node);
    let content = content.trim_matches('\n');
    if content.trim().is_empty() {
        return None;
    }

    if parent_tag_name_equals(element.node, "li") {
        Some(format!("\n{content}\n"))
    } else {
        Some(format!("\n\n{content}\n\n"))
    }
}
