use super::{Element, Handlers};

pub(super) fn bold_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    emphasis_handler(handlers, element, "**")
}

pub(super) fn italic_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    emphasis_handler(handlers, element, "*")
}

fn emphasis_handler(handlers: &dyn Handlers, element: Element, marker: &str) -> Option<String> {
    let content = handlers.walk_children(element.node);
    if content.is_empty() {
        return None;
    }

    // Markers must hug the text: `<b> bold </b>` renders as ` **bold** `
    let trimmed_start = content.trim_start();
    let leading = &content[..content.len() - trimmed_start.len()];
    let inner = trimmed_start.trim_end();
    let trailing = &trimmed_start[inner.len()..];

    if inner.is_empty() {
        // Emphasis on whitespace alone means nothing
        return Some(" ".to_string());
    }

    Some(format!(
        "{}{marker}{inner}{marker}{}",
        collapse_to_space(leading),
        collapse_to_space(trailing)
    ))
}

fn collapse_to_space(whitespace: &str) -> &str {
    if whitespace.is_empty() { "" } else { " " }
}
