//! The host page as seen by the renderers
//!
//! Renderers never look elements up ad hoc. They ask the [`View`] for one of
//! the fixed slots of the page contract; a slot the page does not provide is
//! simply `None`.

mod element;
mod page;

pub use element::Element;
pub use page::PageView;

/// Single-element slots of the page contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    PostTitle,
    PostFeaturedImage,
    PostDate,
    PostAuthor,
    ReadingTimeValue,
    PostContent,
    PostTags,
    LatestPostsContainer,
}

impl Selector {
    /// CSS selector of the slot in the page template
    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::PostTitle => ".post-title",
            Selector::PostFeaturedImage => ".post-featured-image",
            Selector::PostDate => ".post-date",
            Selector::PostAuthor => ".post-author",
            Selector::ReadingTimeValue => ".reading-time-value",
            Selector::PostContent => "#post-content",
            Selector::PostTags => "#post-tags",
            Selector::LatestPostsContainer => "#latest-posts-container",
        }
    }

    /// Placeholder name used when the view is rendered into a page shell
    pub fn key(&self) -> &'static str {
        match self {
            Selector::PostTitle => "post_title",
            Selector::PostFeaturedImage => "post_featured_image",
            Selector::PostDate => "post_date",
            Selector::PostAuthor => "post_author",
            Selector::ReadingTimeValue => "reading_time",
            Selector::PostContent => "post_content",
            Selector::PostTags => "post_tags",
            Selector::LatestPostsContainer => "latest_posts",
        }
    }
}

/// Regions whose whole markup is swapped for a shared template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `#site-header`, which also holds the `.main-nav` links
    Header,
    /// `#site-footer`, which also holds `.current-year`
    Footer,
}

/// Attribute that identifies a meta tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// Where the page is being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Full page URL
    pub href: String,
    /// Path component, e.g. `/posts/my-post/`
    pub pathname: String,
}

impl Location {
    /// Build a location from a site base URL and a path
    pub fn new(base_url: &str, pathname: &str) -> Self {
        let pathname = if pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{}", pathname)
        };
        Self {
            href: format!("{}{}", base_url.trim_end_matches('/'), pathname),
            pathname,
        }
    }
}

/// Capability interface over the host page
pub trait View {
    /// The element filling `selector`, if the page has one
    fn element(&mut self, selector: Selector) -> Option<&mut Element>;

    /// All `.share-btn` elements, in document order
    fn share_buttons(&mut self) -> Vec<&mut Element>;

    /// Outer markup of a shared region, if the page has one
    fn region(&mut self, region: Region) -> Option<&mut String>;

    /// Current page location
    fn location(&self) -> &Location;

    /// Set the document title
    fn set_document_title(&mut self, title: &str);

    /// Set the `content` of the meta tag identified by `attr="key"`,
    /// creating the tag when the page does not have it yet
    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str);
}
