use super::super::node_util::{escape_link_destination, get_attr};
use super::{Element, Handlers};

/// `<img src="x" alt="y">` -> `![](x)`. Alt text is not carried over.
pub(super) fn img_handler(_handlers: &dyn Handlers, element: Element) -> Option<String> {
    let src = get_attr(element.attrs, "src")?;
    let src = src.trim();
    if src.is_empty() {
        return None;
    }
    Some(format!("![]({})", escape_link_destination(src)))
}
