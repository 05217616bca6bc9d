use super::{Element, Handlers};

pub(super) fn p_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    let content = handlers.walk_children(element.node);
    let content = content.trim_matches(|c| c == '\n' || c == ' ');
    if content.is_empty() {
        return None;
    }
    Some(format!("\n\n{content}\n\n"))
}
