use std::rc::Rc;

use markup5ever_rcdom::{Node, NodeData};

use super::element_handler::{Element, ElementHandlers};

pub(crate) fn walk_node(node: &Rc<Node>, buffer: &mut String, handlers: &ElementHandlers) {
    match node.data {
        NodeData::Document => walk_children(node, buffer, handlers),

        NodeData::Text { ref contents } => {
            let borrowed = contents.borrow();
            let text = compress_whitespace(&borrowed);

            // Whitespace at the start of a line, or after a space, carries no meaning
            if buffer.is_empty() || buffer.ends_with(&[' ', '\n'][..]) {
                let trimmed = text.trim_start_matches(' ');
                if !trimmed.is_empty() {
                    buffer.push_str(trimmed);
                }
            } else if !text.is_empty() {
                buffer.push_str(&text);
            }
        }

        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let tag = &*name.local;
            let attrs = attrs.borrow();
            let element = Element {
                node,
                tag,
                attrs: &attrs,
            };

            if is_block_element(tag) {
                trim_buffer_end_spaces(buffer);
            }

            if let Some(content) = handlers.handle(element) {
                let content = normalize_content_for_buffer(buffer, content);
                if !content.is_empty() {
                    buffer.push_str(&content);
                }
            }
        }

        NodeData::Comment { .. }
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}

pub(crate) fn walk_children(node: &Rc<Node>, buffer: &mut String, handlers: &ElementHandlers) {
    for child in node.children.borrow().iter() {
        walk_node(child, buffer, handlers);
    }
}

/// Collapse every run of whitespace into a single space.
pub(crate) fn compress_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push(' ');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}

/// Normalizes content before adding to buffer by:
/// 1. Dropping spaces at the start of a line
/// 2. Collapsing excessive newlines (max 2 consecutive newlines)
/// 3. Collapsing adjacent spaces between inline elements
fn normalize_content_for_buffer(buffer: &str, mut content: String) -> String {
    if buffer.is_empty() || buffer.ends_with('\n') {
        let leading_spaces = content.len() - content.trim_start_matches(' ').len();
        content.drain(..leading_spaces);
    }
    if buffer.is_empty() {
        return content;
    }

    // '\n' is a single byte in UTF-8
    let last_newlines = buffer
        .as_bytes()
        .iter()
        .rev()
        .take_while(|&&b| b == b'\n')
        .count();

    let content_newlines = content
        .as_bytes()
        .iter()
        .take_while(|&&b| b == b'\n')
        .count();

    let total_newlines = last_newlines + content_newlines;

    if total_newlines > 2 {
        let to_remove = std::cmp::min(total_newlines - 2, content_newlines);
        content.drain(..to_remove);
    }

    if last_newlines == 0
        && content_newlines == 0
        && buffer.as_bytes().last() == Some(&b' ')
        && content.as_bytes().first() == Some(&b' ')
    {
        content.remove(0);
    }

    content
}

fn trim_buffer_end_spaces(buffer: &mut String) {
    let end = buffer.trim_end_matches(' ').len();
    buffer.truncate(end);
}

/// Final cleanup of a rendered document: no leading blank lines, no trailing
/// spaces on any line, never more than one blank line in a row. Lines inside
/// fenced code blocks are kept verbatim.
pub(crate) fn finalize_markdown(buffer: &str) -> String {
    let mut result = String::with_capacity(buffer.len());
    let mut pending_newlines = 0usize;
    let mut open_fence: Option<&str> = None;

    for line in buffer.trim_start_matches(&['\n', ' ', '\t'][..]).split('\n') {
        if let Some(fence) = open_fence {
            result.push('\n');
            result.push_str(line);
            if line.trim() == fence {
                open_fence = None;
            }
            continue;
        }

        // Keep two-space hard breaks, drop any other trailing whitespace
        let trimmed = line.trim_end();
        let line = if line.ends_with("  ") && !trimmed.is_empty() {
            &line[..trimmed.len() + 2]
        } else {
            trimmed
        };

        if line.is_empty() {
            pending_newlines += 1;
            continue;
        }

        if !result.is_empty() {
            result.push_str(if pending_newlines > 0 { "\n\n" } else { "\n" });
        }
        pending_newlines = 0;
        result.push_str(line);

        let marker = line.trim_start();
        if marker.starts_with("```") {
            let fence_len = marker.bytes().take_while(|&b| b == b'`').count();
            open_fence = Some(&marker[..fence_len]);
        }
    }

    // Preserve the closing blank line of the last block, if it had one
    if !result.is_empty() && open_fence.is_none() {
        match pending_newlines {
            0 => {}
            1 => result.push('\n'),
            _ => result.push_str("\n\n"),
        }
    }

    result
}

// Block-level elements, taken from the
// [CommonMark spec](https://spec.commonmark.org/0.31.2/#html-blocks).
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "base", "basefont", "blockquote", "body", "caption",
    "center", "col", "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2",
    "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "iframe", "legend", "li", "link",
    "main", "menu", "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param",
    "pre", "script", "search", "section", "style", "summary", "table", "tbody", "td",
    "textarea", "tfoot", "th", "thead", "title", "tr", "track", "ul",
];

pub(crate) fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(compress_whitespace("a \n\t b"), "a b");
        assert_eq!(compress_whitespace("\n\n"), " ");
    }

    #[test]
    fn newlines_across_boundary_are_capped() {
        assert_eq!(
            normalize_content_for_buffer("# T\n\n", "\n\nBody\n\n".to_string()),
            "Body\n\n"
        );
        assert_eq!(normalize_content_for_buffer("a ", " b".to_string()), "b");
        assert_eq!(normalize_content_for_buffer("x\n", "  [l](u)".to_string()), "[l](u)");
    }

    #[test]
    fn finalize_keeps_trailing_blank_line() {
        assert_eq!(finalize_markdown("\n\n# T\n\n\n\nHi\n\n"), "# T\n\nHi\n\n");
        assert_eq!(finalize_markdown("- a\n- b\n"), "- a\n- b\n");
        assert_eq!(finalize_markdown("plain"), "plain");
        assert_eq!(finalize_markdown("   \n\n"), "");
    }

    #[test]
    fn finalize_leaves_code_fences_alone() {
        let md = "```\nfn main() {\n\n\n}   \n```\n\n";
        assert_eq!(finalize_markdown(md), md);
    }

    #[test]
    fn finalize_keeps_hard_breaks() {
        assert_eq!(finalize_markdown("a  \nb"), "a  \nb");
        assert_eq!(finalize_markdown("a   \t\nb"), "a\nb");
    }
}
