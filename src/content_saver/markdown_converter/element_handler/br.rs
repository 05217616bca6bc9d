use super::{Element, Handlers};

pub(super) fn br_handler(_handlers: &dyn Handlers, _element: Element) -> Option<String> {
    Some("  \n".to_string())
}
