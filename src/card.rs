// src/card.rs
use std::collections::{BTreeMap, HashMap};

use crate::dom::Element;

/// Anything that can answer "what is this card's value for filter key K".
/// The scanner and matcher only see this trait, so they run against plain
/// maps in tests and against parsed markup in the widget.
pub trait AttributeSource {
    fn data(&self, key: &str) -> Option<&str>;

    /// Every value of `key` the card carries. Flat sources have at most one.
    fn data_all(&self, key: &str) -> Vec<&str> {
        self.data(key).into_iter().collect()
    }
}

impl AttributeSource for Element {
    /// `data-{key}` on the element itself or its first descendant carrying it.
    fn data(&self, key: &str) -> Option<&str> {
        self.find_attr(&data_attr!(key))
    }

    /// `data-{key}` on the element and on every descendant carrying it.
    fn data_all(&self, key: &str) -> Vec<&str> {
        self.find_attr_all(&data_attr!(key))
    }
}

impl AttributeSource for HashMap<String, String> {
    fn data(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn data(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// One unit of the wall. Owned by the widget for its whole life; pages and
/// the visible set refer to cards by their index in the widget's card list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    element: Element,
}

impl Card {
    pub fn new(element: Element) -> Self { Self { element } }

    pub fn element(&self) -> &Element { &self.element }

    /// Visible text, for list-style frontends.
    pub fn text(&self) -> String { self.element.text_content() }
}

impl AttributeSource for Card {
    fn data(&self, key: &str) -> Option<&str> {
        self.element.data(key)
    }

    fn data_all(&self, key: &str) -> Vec<&str> {
        self.element.data_all(key)
    }
}
