//! Front-matter parsing
//!
//! The header grammar is deliberately small: one `key: value` pair per line,
//! plus a `tags:` line followed by `- item` lines. Values are never typed;
//! `published: true` stays the string `"true"`.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Opening `---`, header, closing `---` line, body
    static ref FRONTMATTER_RE: Regex =
        Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n([\s\S]*)$").expect("valid front-matter regex");
}

/// Key under which list items are collected
const TAGS_KEY: &str = "tags";

/// Header data parsed from the top of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
    tags: Option<Vec<String>>,
}

/// A parsed document: header plus the body that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub front_matter: FrontMatter,
    pub content: &'a str,
}

impl FrontMatter {
    /// Split `source` into front-matter and body
    ///
    /// A document without a well-formed header yields an empty
    /// [`FrontMatter`] and the whole source as body.
    pub fn parse(source: &str) -> Document<'_> {
        let Some(captures) = FRONTMATTER_RE.captures(source) else {
            return Document {
                front_matter: FrontMatter::default(),
                content: source,
            };
        };

        let header = captures.get(1).map_or("", |m| m.as_str());
        let content = captures.get(2).map_or("", |m| m.as_str());

        Document {
            front_matter: Self::parse_header(header),
            content,
        }
    }

    fn parse_header(header: &str) -> Self {
        let mut front_matter = FrontMatter::default();

        for line in header.split('\n') {
            let trimmed = line.trim();

            // List items belong to the most recent `tags:` line, wherever it was
            if let Some(item) = trimmed.strip_prefix('-') {
                match front_matter.tags.as_mut() {
                    Some(tags) => tags.push(strip_quotes(item.trim()).to_string()),
                    None => tracing::debug!("Ignoring list item outside of tags: {:?}", trimmed),
                }
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();

            if key == TAGS_KEY {
                front_matter.tags = Some(Vec::new());
            } else {
                front_matter
                    .fields
                    .insert(key.to_string(), strip_quotes(value.trim()).to_string());
            }
        }

        front_matter
    }

    /// Value of a header field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Tags, if the header declared a `tags:` list
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// All plain fields in header order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.tags.is_none()
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn datetime(&self) -> Option<&str> {
        self.get("datetime")
    }

    /// Declared featured image name
    pub fn featured_image(&self) -> Option<&str> {
        self.get("featuredImage")
    }

    pub fn image_alt(&self) -> Option<&str> {
        self.get("imageAlt")
    }
}

/// Strip one pair of matching surrounding quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let source = r#"---
title: "Hello World"
date: 'March 3, 2024'
author: Jane
featuredImage: anxiety-journey
tags:
- rust
- web
---
# Heading

Body text.
"#;

        let doc = FrontMatter::parse(source);
        let fm = &doc.front_matter;
        assert_eq!(fm.title(), Some("Hello World"));
        assert_eq!(fm.date(), Some("March 3, 2024"));
        assert_eq!(fm.author(), Some("Jane"));
        assert_eq!(fm.featured_image(), Some("anxiety-journey"));
        assert_eq!(fm.tags(), Some(&["rust".to_string(), "web".to_string()][..]));
        assert_eq!(doc.content, "# Heading\n\nBody text.\n");
    }

    #[test]
    fn test_body_is_verbatim() {
        let body = "First line\n\n  indented: with colon\n---\ntrailing\n";
        let source = format!("---\ntitle: T\n---\n{}", body);
        let doc = FrontMatter::parse(&source);
        assert_eq!(doc.content, body);
        assert_eq!(doc.front_matter.fields().count(), 1);
    }

    #[test]
    fn test_no_frontmatter() {
        let source = "# Just markdown\n\ntitle: not a header\n";
        let doc = FrontMatter::parse(source);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.content, source);
    }

    #[test]
    fn test_unterminated_frontmatter() {
        let source = "---\ntitle: Missing close\n\nBody";
        let doc = FrontMatter::parse(source);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.content, source);
    }

    #[test]
    fn test_closing_delimiter_needs_newline() {
        let source = "---\ntitle: T\n---";
        let doc = FrontMatter::parse(source);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.content, source);
    }

    #[test]
    fn test_tags_list() {
        let doc = FrontMatter::parse("---\ntags:\n- a\n- b\n---\nbody");
        assert_eq!(doc.front_matter.tags(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_tags_coupled_to_last_tags_line() {
        let source = "---\ntags:\n- a\nauthor: Jane\n- b\ntags: ignored inline\n- c\n---\nbody";
        let fm = FrontMatter::parse(source).front_matter;
        assert_eq!(fm.tags(), Some(&["c".to_string()][..]));
        assert_eq!(fm.author(), Some("Jane"));
        assert_eq!(fm.get("tags"), None);
    }

    #[test]
    fn test_list_items_without_tags_ignored() {
        let fm = FrontMatter::parse("---\n- stray\ntitle: T\n---\nbody").front_matter;
        assert_eq!(fm.tags(), None);
        assert_eq!(fm.title(), Some("T"));
        assert_eq!(fm.fields().count(), 1);
    }

    #[test]
    fn test_value_split_on_first_colon() {
        let fm = FrontMatter::parse("---\nlink: https://example.com/a:b\n---\n").front_matter;
        assert_eq!(fm.get("link"), Some("https://example.com/a:b"));
    }

    #[test]
    fn test_quotes_only_stripped_when_symmetric() {
        let fm = FrontMatter::parse(
            "---\na: \"both\"\nb: 'single'\nc: \"mixed'\nd: \"inner \"quote\"\"\n---\n",
        )
        .front_matter;
        assert_eq!(fm.get("a"), Some("both"));
        assert_eq!(fm.get("b"), Some("single"));
        assert_eq!(fm.get("c"), Some("\"mixed'"));
        assert_eq!(fm.get("d"), Some("inner \"quote\""));
    }

    #[test]
    fn test_quoted_tag_items() {
        let fm = FrontMatter::parse("---\ntags:\n- \"rust\"\n- 'async io'\n- \"open\n---\n").front_matter;
        assert_eq!(
            fm.tags(),
            Some(&["rust".to_string(), "async io".to_string(), "\"open".to_string()][..])
        );
    }

    #[test]
    fn test_no_type_coercion() {
        let fm = FrontMatter::parse("---\npublished: true\nviews: 42\n---\n").front_matter;
        assert_eq!(fm.get("published"), Some("true"));
        assert_eq!(fm.get("views"), Some("42"));
        assert_eq!(fm.get("missing"), None);
    }
}
