use std::rc::{Rc, Weak};

use html5ever::Attribute;
use html5ever::tendril::StrTendril;
use markup5ever_rcdom::{Node, NodeData};

/// RAII guard to ensure parent reference is restored even on panic.
///
/// `Node::parent` is a `Cell`, so reading it means taking it out; the guard
/// puts it back when it goes out of scope.
struct ParentGuard<'a> {
    node: &'a Rc<Node>,
    value: Option<Option<Weak<Node>>>,
}

impl Drop for ParentGuard<'_> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.node.parent.set(value);
        }
    }
}

impl<'a> ParentGuard<'a> {
    fn new(node: &'a Rc<Node>) -> Self {
        let value = node.parent.take();
        Self {
            node,
            value: Some(value),
        }
    }

    fn upgrade(&self) -> Option<Rc<Node>> {
        self.value.as_ref()?.as_ref()?.upgrade()
    }
}

pub(crate) fn get_node_tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Document => Some("html"),
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub(crate) fn get_parent_node(node: &Rc<Node>) -> Option<Rc<Node>> {
    let guard = ParentGuard::new(node);
    guard.upgrade()
}

/// Check to see if node's parent's tag name is `tag_name`.
pub(crate) fn parent_tag_name_equals(node: &Rc<Node>, tag_name: &str) -> bool {
    get_parent_node(node)
        .as_ref()
        .and_then(|parent| get_node_tag_name(parent).map(|tag| tag == tag_name))
        .unwrap_or(false)
}

pub(crate) fn get_attr(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| attr.value.to_string())
}

/// Overwrite an existing attribute's value. Returns false if the node is not
/// an element or does not carry the attribute.
pub(crate) fn set_attr(node: &Rc<Node>, name: &str, value: &str) -> bool {
    let NodeData::Element { ref attrs, .. } = node.data else {
        return false;
    };
    let mut attrs = attrs.borrow_mut();
    match attrs.iter_mut().find(|attr| &*attr.name.local == name) {
        Some(attr) => {
            attr.value = StrTendril::from_slice(value);
            true
        }
        None => false,
    }
}

/// Concatenated text of a subtree, exactly as it appears in the source.
/// `<br>` becomes a newline and `<img>` keeps its reference as `![](src)`.
pub(crate) fn extract_raw_text(node: &Rc<Node>) -> String {
    let mut text = String::new();
    collect_raw_text(node, &mut text);
    text
}

fn collect_raw_text(node: &Rc<Node>, buffer: &mut String) {
    match &node.data {
        NodeData::Text { contents } => buffer.push_str(&contents.borrow()),
        NodeData::Element { name, .. } if &*name.local == "br" => buffer.push('\n'),
        NodeData::Element { name, attrs, .. } if &*name.local == "img" => {
            if let Some(src) = get_attr(&attrs.borrow(), "src").filter(|s| !s.trim().is_empty()) {
                buffer.push_str("![](");
                buffer.push_str(&escape_link_destination(src.trim()));
                buffer.push(')');
            }
        }
        NodeData::Element { .. } | NodeData::Document => {
            for child in node.children.borrow().iter() {
                collect_raw_text(child, buffer);
            }
        }
        _ => {}
    }
}

/// Make a URL safe inside `( )`: parentheses are escaped and a destination
/// containing spaces is wrapped in `< >`.
pub(crate) fn escape_link_destination(url: &str) -> String {
    let escaped = url.replace('(', "\\(").replace(')', "\\)");
    if escaped.contains(' ') {
        format!("<{escaped}>")
    } else {
        escaped
    }
}

/// Pre-order list of every element node with the given tag.
pub(crate) fn collect_elements(root: &Rc<Node>, tag: &str) -> Vec<Rc<Node>> {
    let mut found = Vec::new();
    collect_elements_into(root, tag, &mut found);
    found
}

fn collect_elements_into(node: &Rc<Node>, tag: &str, found: &mut Vec<Rc<Node>>) {
    if let NodeData::Element { ref name, .. } = node.data
        && &*name.local == tag
    {
        found.push(Rc::clone(node));
    }
    for child in node.children.borrow().iter() {
        collect_elements_into(child, tag, found);
    }
}
