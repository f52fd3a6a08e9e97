//! A minimal element model: tag, attributes and inner markup

use indexmap::IndexMap;

use crate::helpers::html_escape;

/// Tags rendered without a closing tag
const VOID_TAGS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

/// An element of the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    inner_html: String,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: IndexMap::new(),
            inner_html: String::new(),
        }
    }

    /// Builder form of [`Element::set_attribute`]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::set_inner_html`]
    pub fn with_inner_html(mut self, html: &str) -> Self {
        self.set_inner_html(html);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn set_inner_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
    }

    /// Append markup after the current children
    pub fn append_html(&mut self, html: &str) {
        self.inner_html.push_str(html);
    }

    /// Replace the children with escaped text
    pub fn set_text(&mut self, text: &str) {
        self.inner_html = html_escape(text);
    }

    /// Serialize the element with its children
    pub fn outer_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            html.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
        }
        html.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return html;
        }

        html.push_str(&self.inner_html);
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}
