mod anchor;
mod br;
mod code;
mod emphasis;
mod headings;
mod img;
mod li;
mod list;
mod p;
mod pre;

use std::collections::HashMap;
use std::rc::Rc;

use html5ever::Attribute;
use markup5ever_rcdom::Node;

use super::dom_walker::{is_block_element, walk_children};

use anchor::anchor_handler;
use br::br_handler;
use code::code_handler;
use emphasis::{bold_handler, italic_handler};
use headings::headings_handler;
use img::img_handler;
use li::list_item_handler;
use list::list_handler;
use p::p_handler;
use pre::pre_handler;

/// An element being rendered, borrowed from the document tree.
pub struct Element<'a> {
    pub node: &'a Rc<Node>,
    pub tag: &'a str,
    pub attrs: &'a [Attribute],
}

/// Access to the renderer from inside a handler.
pub trait Handlers {
    /// Render all children of `node` and return the Markdown.
    fn walk_children(&self, node: &Rc<Node>) -> String;
}

/// Trait for handling the conversion of a specific HTML element to Markdown.
///
/// `None` means "emit nothing"; `Some(String::new())` is equivalent.
pub trait ElementHandler: Send + Sync {
    fn handle(&self, handlers: &dyn Handlers, element: Element) -> Option<String>;
}

impl<F> ElementHandler for F
where
    F: (Fn(&dyn Handlers, Element) -> Option<String>) + Send + Sync,
{
    fn handle(&self, handlers: &dyn Handlers, element: Element) -> Option<String> {
        self(handlers, element)
    }
}

/// Tag → handler registry.
///
/// Tags without a registered handler are unwrapped: the tag disappears and
/// its rendered children take its place (block elements keep a blank line
/// around them).
pub(crate) struct ElementHandlers {
    handlers: Vec<Box<dyn ElementHandler>>,
    tag_to_handler: HashMap<&'static str, usize>,
}

impl ElementHandlers {
    pub fn new() -> Self {
        let mut handlers = Self {
            handlers: Vec::new(),
            tag_to_handler: HashMap::new(),
        };

        handlers.add_handler(vec!["h1", "h2", "h3", "h4", "h5", "h6"], headings_handler);
        handlers.add_handler(vec!["p"], p_handler);
        handlers.add_handler(vec!["strong", "b"], bold_handler);
        handlers.add_handler(vec!["em", "i"], italic_handler);
        handlers.add_handler(vec!["a"], anchor_handler);
        handlers.add_handler(vec!["img"], img_handler);
        handlers.add_handler(vec!["ul", "ol"], list_handler);
        handlers.add_handler(vec!["li"], list_item_handler);
        handlers.add_handler(vec!["code"], code_handler);
        handlers.add_handler(vec!["pre"], pre_handler);
        handlers.add_handler(vec!["br"], br_handler);

        // Content with no Markdown representation
        handlers.add_handler(
            vec!["head", "script", "style", "template", "noscript", "iframe", "svg"],
            discard_handler,
        );

        handlers
    }

    /// Register `handler` for `tags`. A later registration for the same tag
    /// replaces the earlier one.
    pub fn add_handler<Handler>(&mut self, tags: Vec<&'static str>, handler: Handler)
    where
        Handler: ElementHandler + 'static,
    {
        assert!(!tags.is_empty(), "tags cannot be empty.");
        let handler_idx = self.handlers.len();
        self.handlers.push(Box::new(handler));
        for tag in tags {
            self.tag_to_handler.insert(tag, handler_idx);
        }
    }

    pub fn handle(&self, element: Element) -> Option<String> {
        match self.tag_to_handler.get(element.tag) {
            Some(&idx) => self.handlers[idx].handle(self, element),
            None if is_block_element(element.tag) => block_handler(self, element),
            None => Some(self.walk_children(element.node)),
        }
    }
}

impl Handlers for ElementHandlers {
    fn walk_children(&self, node: &Rc<Node>) -> String {
        let mut buffer = String::new();
        walk_children(node, &mut buffer, self);
        buffer
    }
}

fn block_handler(handlers: &dyn Handlers, element: Element) -> Option<String> {
    let content = handlers.walk_children(element.node);
    let content = content.trim_matches('\n');
    if content.trim().is_empty() {
        return None;
    }
    Some(format!("\n\n{content}\n\n"))
}

fn discard_handler(_handlers: &dyn Handlers, _element: Element) -> Option<String> {
    None
}
