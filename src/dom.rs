// src/dom.rs
//! Owned element tree standing in for the host page.
//!
//! Parsed from markup by `core::html::parse_fragment`, mutated by nobody but
//! the widget renderer, and written back out with [`to_html`]. Attribute and
//! tag names are stored lower-cased; attribute order is preserved.

use std::fmt;
use std::str::FromStr;

use crate::core::html::{is_raw_text, is_void};
use crate::core::sanitize::{escape_attr, escape_text, normalize_ws};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self { Node::Element(el) }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self { Node::Text(s!(text)) }
}

impl From<String> for Node {
    fn from(text: String) -> Self { Node::Text(text) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into().to_ascii_lowercase(), attrs: Vec::new(), children: Vec::new() }
    }

    /* ---------- builder helpers ---------- */

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /* ---------- attributes ---------- */

    pub fn attrs(&self) -> &[(String, String)] { &self.attrs }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set or overwrite; a new attribute goes to the end.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn id(&self) -> Option<&str> { self.attr("id") }

    /* ---------- classes ---------- */

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add one or more space-separated classes, skipping ones already present.
    pub fn add_class(&mut self, class: &str) {
        let mut list: Vec<String> = self.classes().map(String::from).collect();
        for c in class.split_whitespace() {
            if !list.iter().any(|have| have == c) {
                list.push(s!(c));
            }
        }
        self.set_attr("class", list.join(" "));
    }

    pub fn remove_class(&mut self, class: &str) {
        if self.attr("class").is_none() {
            return;
        }
        let list: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        let joined = list.join(" ");
        self.set_attr("class", joined);
    }

    /* ---------- traversal ---------- */

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Value of `name` on this element or, failing that, on the first
    /// descendant carrying it (document order).
    pub fn find_attr(&self, name: &str) -> Option<&str> {
        if let Some(v) = self.attr(name) {
            return Some(v);
        }
        self.element_children().find_map(|child| child.find_attr(name))
    }

    /// Every value of `name` on this element and its descendants, in
    /// document order.
    pub fn find_attr_all(&self, name: &str) -> Vec<&str> {
        let mut out = Vec::new();
        collect_attr(self, name, &mut out);
        out
    }

    /// Visible text with whitespace collapsed.
    pub fn text_content(&self) -> String {
        let mut raw = String::new();
        collect_text(self, &mut raw);
        normalize_ws(&raw)
    }

    pub fn matches(&self, sel: &Selector) -> bool {
        match sel {
            Selector::First => true,
            Selector::Id(id) => self.id() == Some(id.as_str()),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag == *tag,
        }
    }
}

fn collect_attr<'a>(el: &'a Element, name: &str, out: &mut Vec<&'a str>) {
    if let Some(v) = el.attr(name) {
        out.push(v);
    }
    for child in el.element_children() {
        collect_attr(child, name, out);
    }
}

fn collect_text(el: &Element, out: &mut String) {
    if is_raw_text(&el.tag) {
        return;
    }
    for child in &el.children {
        match child {
            Node::Text(t) => { out.push_str(t); out.push(' '); }
            Node::Element(e) => collect_text(e, out),
        }
    }
}

/// The subset of CSS selectors the widget needs to locate its container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// First element in document order
    First,
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    /// `#id`, `.class`, a tag name, or blank for the first element.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            Selector::First
        } else if let Some(id) = s.strip_prefix('#') {
            Selector::Id(s!(id))
        } else if let Some(class) = s.strip_prefix('.') {
            Selector::Class(s!(class))
        } else {
            Selector::Tag(s.to_ascii_lowercase())
        }
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::parse(s))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::First => write!(f, "(first element)"),
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(c) => write!(f, ".{c}"),
            Selector::Tag(t) => write!(f, "{t}"),
        }
    }
}

/// First element matching `sel`, depth-first in document order.
pub fn find<'a>(nodes: &'a [Node], sel: &Selector) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.matches(sel) {
                return Some(el);
            }
            if let Some(hit) = find(&el.children, sel) {
                return Some(hit);
            }
        }
    }
    None
}

/// Replace the first element matching `sel` with `replacement`, in place.
/// Returns false when nothing matched.
pub fn splice(nodes: &mut Vec<Node>, sel: &Selector, replacement: Vec<Node>) -> bool {
    let mut slot = Some(replacement);
    splice_in(nodes, sel, &mut slot);
    slot.is_none()
}

fn splice_in(nodes: &mut Vec<Node>, sel: &Selector, slot: &mut Option<Vec<Node>>) {
    let mut i = 0;
    while i < nodes.len() && slot.is_some() {
        let hit = matches!(&nodes[i], Node::Element(el) if el.matches(sel));
        if hit {
            if let Some(rep) = slot.take() {
                nodes.splice(i..=i, rep);
            }
            return;
        }
        if let Node::Element(el) = &mut nodes[i] {
            splice_in(&mut el.children, sel, slot);
        }
        i += 1;
    }
}

/// Serialize back to markup.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, false);
    }
    out
}

fn write_node(out: &mut String, node: &Node, raw: bool) {
    match node {
        Node::Text(t) if raw => out.push_str(t),
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (k, v) in &el.attrs {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(v));
                out.push('"');
            }
            out.push('>');
            if is_void(&el.tag) {
                return;
            }
            let raw = is_raw_text(&el.tag);
            for child in &el.children {
                write_node(out, child, raw);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}
