//! In-memory page used by the CLI and the static build

use indexmap::IndexMap;

use super::{Element, Location, MetaAttr, Region, Selector, View};
use crate::helpers::html_escape;

/// Share platforms present on the stock post page
const SHARE_PLATFORMS: &[&str] = &["twitter", "linkedin", "facebook"];

/// A page held in memory
///
/// Slots, share buttons and regions exist only when the page was built with
/// them, so renderers see the same optional slots a real page offers.
#[derive(Debug, Clone)]
pub struct PageView {
    location: Location,
    title: String,
    meta: Vec<Element>,
    slots: IndexMap<Selector, Element>,
    share_buttons: Vec<Element>,
    regions: IndexMap<Region, String>,
}

impl PageView {
    /// An empty page at `location`
    pub fn new(location: Location) -> Self {
        Self {
            location,
            title: String::new(),
            meta: Vec::new(),
            slots: IndexMap::new(),
            share_buttons: Vec::new(),
            regions: IndexMap::new(),
        }
    }

    /// A page with every slot of the single-post template
    pub fn post_page(location: Location) -> Self {
        let mut page = Self::new(location).with_layout_regions();
        page.slots.insert(
            Selector::PostTitle,
            Element::new("h1").with_attribute("class", "post-title"),
        );
        page.slots.insert(
            Selector::PostFeaturedImage,
            Element::new("img").with_attribute("class", "post-featured-image"),
        );
        page.slots.insert(
            Selector::PostDate,
            Element::new("time").with_attribute("class", "post-date"),
        );
        page.slots.insert(
            Selector::PostAuthor,
            Element::new("span").with_attribute("class", "post-author"),
        );
        page.slots.insert(
            Selector::ReadingTimeValue,
            Element::new("span").with_attribute("class", "reading-time-value"),
        );
        page.slots.insert(
            Selector::PostContent,
            Element::new("div").with_attribute("id", "post-content"),
        );
        page.slots.insert(
            Selector::PostTags,
            Element::new("div").with_attribute("id", "post-tags"),
        );
        SHARE_PLATFORMS
            .iter()
            .fold(page, |page, platform| page.with_share_button(platform))
    }

    /// A page with the latest-posts container
    pub fn index_page(location: Location) -> Self {
        let mut page = Self::new(location).with_layout_regions();
        page.slots.insert(
            Selector::LatestPostsContainer,
            Element::new("div").with_attribute("id", "latest-posts-container"),
        );
        page
    }

    /// Add the `#site-header`/`#site-footer` placeholders
    pub fn with_layout_regions(mut self) -> Self {
        self.regions
            .insert(Region::Header, r#"<div id="site-header"></div>"#.to_string());
        self.regions
            .insert(Region::Footer, r#"<div id="site-footer"></div>"#.to_string());
        self
    }

    /// Add or replace a slot
    pub fn with_slot(mut self, selector: Selector, element: Element) -> Self {
        self.slots.insert(selector, element);
        self
    }

    /// Add a `.share-btn` for `platform`
    pub fn with_share_button(mut self, platform: &str) -> Self {
        self.share_buttons.push(
            Element::new("a")
                .with_attribute("class", "share-btn")
                .with_attribute("data-platform", platform)
                .with_attribute("href", "#"),
        );
        self
    }

    /// Remove a slot
    pub fn without_slot(mut self, selector: Selector) -> Self {
        self.slots.shift_remove(&selector);
        self
    }

    /// Read-only access to a slot
    pub fn slot(&self, selector: Selector) -> Option<&Element> {
        self.slots.get(&selector)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The `content` of the meta tag `attr="key"`
    pub fn meta_content(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.attribute(attr.as_str()) == Some(key))
            .and_then(|m| m.attribute("content"))
    }

    pub fn meta_tags(&self) -> &[Element] {
        &self.meta
    }

    /// Share button for `platform`
    pub fn share_button(&self, platform: &str) -> Option<&Element> {
        self.share_buttons
            .iter()
            .find(|b| b.attribute("data-platform") == Some(platform))
    }

    /// Current markup of a region
    pub fn region_html(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Placeholder data for rendering the page into a shell template
    ///
    /// Slots are serialized with their own markup under [`Selector::key`];
    /// `header`, `footer`, `title`, `meta` and `share_buttons` cover the rest.
    pub fn to_context(&self) -> IndexMap<String, String> {
        let mut context = IndexMap::new();
        context.insert("title".to_string(), html_escape(&self.title));
        context.insert(
            "meta".to_string(),
            self.meta
                .iter()
                .map(Element::outer_html)
                .collect::<Vec<_>>()
                .join("\n"),
        );
        for (region, key) in [(Region::Header, "header"), (Region::Footer, "footer")] {
            context.insert(
                key.to_string(),
                self.regions.get(&region).cloned().unwrap_or_default(),
            );
        }
        for (selector, element) in &self.slots {
            context.insert(selector.key().to_string(), element.outer_html());
        }
        context.insert(
            "share_buttons".to_string(),
            self.share_buttons
                .iter()
                .map(Element::outer_html)
                .collect::<Vec<_>>()
                .join("\n"),
        );
        context
    }
}

impl View for PageView {
    fn element(&mut self, selector: Selector) -> Option<&mut Element> {
        self.slots.get_mut(&selector)
    }

    fn share_buttons(&mut self) -> Vec<&mut Element> {
        self.share_buttons.iter_mut().collect()
    }

    fn region(&mut self, region: Region) -> Option<&mut String> {
        self.regions.get_mut(&region)
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn set_document_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) {
        match self
            .meta
            .iter_mut()
            .find(|m| m.attribute(attr.as_str()) == Some(key))
        {
            Some(meta) => meta.set_attribute("content", content),
            None => self.meta.push(
                Element::new("meta")
                    .with_attribute(attr.as_str(), key)
                    .with_attribute("content", content),
            ),
        }
    }
}
