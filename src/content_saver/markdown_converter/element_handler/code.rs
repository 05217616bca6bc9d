use super::super::node_util::extract_raw_text;
use super::{Element, Handlers};

/// Inline `<code>` -> backtick span. Code inside `<pre>` never reaches this
/// handler: the block renders its raw text directly.
pub(super) fn code_handler(_handlers: &dyn Handlers, element: Element) -> Option<String> {
    let content = extract_raw_text(element.node).replace('\n', " ");
    if content.trim().is_empty() {
        return None;
    }

    // A span containing backticks needs a longer delimiter
    let longest_run = longest_backtick_run(&content);
    let fence = "`".repeat(longest_run + 1);
    let padding = if longest_run > 0 { " " } else { "" };
    Some(format!("{fence}{padding}{content}{padding}{fence}"))
}

/// Length of the longest consecutive run of '`' in `content`.
pub(super) fn longest_backtick_run(content: &str) -> usize {
    content
        .chars()
        .fold((0usize, 0usize), |(max, current), c| {
            if c == '`' {
                (max.max(current + 1), current + 1)
            } else {
                (max, 0)
            }
        })
        .0
}
