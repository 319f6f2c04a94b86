//! XML data model

use indexmap::IndexMap;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create an empty element.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element whose only content is character data.
    ///
    /// Empty text produces no text node, so the element renders as an
    /// adjacent open/close pair.
    pub fn with_text(name: &str, text: &str) -> Self {
        let mut element = Self::new(name);
        if !text.is_empty() {
            element.children.push(Content::Text(text.to_string()));
        }
        element
    }

    /// Insert a string attribute; empty values are omitted.
    pub fn attr(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Insert a numeric attribute; zero is omitted.
    pub fn attr_u32(&mut self, name: &str, value: u32) {
        if value != 0 {
            self.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Insert a boolean attribute; true renders as `"true"`, false is omitted.
    pub fn attr_bool(&mut self, name: &str, value: bool) {
        if value {
            self.attributes.insert(name.to_string(), "true".to_string());
        }
    }

    /// Append a child element.
    pub fn child(&mut self, element: Element) {
        self.children.push(Content::Element(element));
    }
}
