use super::super::node_util::extract_raw_text;
use super::code::longest_backtick_run;
use super::{Element, Handlers};

/// `<pre>` -> fenced code block. Text is taken verbatim, whitespace included.
pub(super) fn pre_handler(_handlers: &dyn Handlers, element: Element) -> Option<String> {
    let raw = extract_raw_text(element.node);
    let content = raw.trim_matches('\n').trim_end();
    if content.trim().is_empty() {
        return None;
    }

    let fence = "`".repeat(longest_backtick_run(content).max(2) + 1);
    Some(format!("\n\n{fence}\n{content}\n{fence}\n\n"))
}
