//! Minimal markup tree
//!
//! The page renderer produces an [`Element`] tree that can be serialised to
//! HTML or inspected directly in tests.

use itertools::Itertools;

/// Child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute; later values for the same name are kept as well
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// First value of attribute `name`
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// This element and every descendant element, in document order
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut found = vec![self];
        for child in self.child_elements() {
            found.extend(child.descendants());
        }
        found
    }

    /// First element (self included) whose attribute `name` equals `value`
    #[must_use]
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Self> {
        self.descendants()
            .into_iter()
            .find(|element| element.attr_value(name) == Some(value))
    }

    /// Text content of every descendant `tag` element, in document order
    #[must_use]
    pub fn texts_of(&self, tag: &str) -> Vec<String> {
        self.descendants()
            .into_iter()
            .filter(|element| element.tag == tag)
            .map(Self::text_content)
            .collect()
    }

    /// Concatenated text of all descendant text nodes
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Serialises the tree as HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let attrs = self
            .attrs
            .iter()
            .map(|(name, value)| format!(" {name}=\"{}\"", escape_attr(value)))
            .join("");
        out.push_str(&format!("<{}{attrs}>", self.tag));
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Element(element) => element.write_html(out),
            }
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

fn escape_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
