//! Single post page

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{FrontMatter, MarkdownRenderer};
use crate::error::{RenderError, Result};
use crate::fetch::{self, Fetcher};
use crate::helpers::{error_message, fill_path, image_url, reading_time, share_urls, tag_list};
use crate::view::{MetaAttr, Selector, View};

/// Shown in the content area when a post cannot be rendered
pub const POST_ERROR_MESSAGE: &str = "Failed to load blog post";

/// Everything computed for a post before the page is touched
#[derive(Debug, Clone)]
pub struct RenderedPost {
    pub slug: String,
    pub front_matter: FrontMatter,
    pub featured_image: String,
    /// Body converted to HTML
    pub html: String,
    pub reading_time: String,
    /// URL of the page the post is displayed on
    pub page_url: String,
    pub share_urls: Vec<(&'static str, String)>,
}

impl RenderedPost {
    pub fn title(&self) -> &str {
        self.front_matter.title().unwrap_or_default()
    }

    /// Share URL for `platform`, if one was generated
    pub fn share_url(&self, platform: &str) -> Option<&str> {
        self.share_urls
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, url)| url.as_str())
    }
}

/// Renders one markdown post into a [`View`]
pub struct PostRenderer {
    fetcher: Arc<dyn Fetcher>,
    config: SiteConfig,
    markdown: MarkdownRenderer,
}

impl PostRenderer {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &SiteConfig) -> Self {
        Self {
            fetcher,
            config: config.clone(),
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Fetch the markdown source of `slug`
    pub async fn fetch_post(&self, slug: &str) -> Result<String> {
        let path = fill_path(&self.config.post_path, "slug", slug);
        let response = fetch::fetch(self.fetcher.as_ref(), &path).await?;
        if !response.is_success() {
            return Err(RenderError::NotFound(slug.to_string()));
        }
        Ok(response.body)
    }

    /// Parse, convert and measure a post without touching the page
    pub fn prepare(&self, slug: &str, markdown: &str, page_url: &str) -> RenderedPost {
        let document = FrontMatter::parse(markdown);
        let front_matter = document.front_matter;

        let featured_image = image_url(
            &self.config,
            front_matter.featured_image().unwrap_or("default"),
        );
        let html = self.markdown.render(document.content);
        let reading_time = reading_time(document.content, self.config.words_per_minute);
        let share_urls = share_urls(front_matter.title().unwrap_or_default(), page_url);

        RenderedPost {
            slug: slug.to_string(),
            front_matter,
            featured_image,
            html,
            reading_time,
            page_url: page_url.to_string(),
            share_urls,
        }
    }

    /// Write a prepared post into the page, then update its metadata
    ///
    /// Optional slots the page lacks are skipped; `#post-content` is
    /// required. Slots written before a failure keep their new values.
    pub fn apply<V: View + ?Sized>(&self, post: &RenderedPost, view: &mut V) -> Result<()> {
        let fm = &post.front_matter;
        let title = post.title();

        if let Some(el) = view.element(Selector::PostTitle) {
            el.set_text(title);
        }

        if let Some(el) = view.element(Selector::PostFeaturedImage) {
            el.set_attribute("src", &post.featured_image);
            el.set_attribute("alt", fm.image_alt().unwrap_or(title));
        }

        if let Some(el) = view.element(Selector::PostDate) {
            el.set_text(fm.date().unwrap_or_default());
            el.set_attribute("datetime", fm.datetime().unwrap_or_default());
        }

        if let Some(el) = view.element(Selector::PostAuthor) {
            el.set_text(fm.author().unwrap_or(&self.config.author));
        }

        if let Some(el) = view.element(Selector::ReadingTimeValue) {
            el.set_text(&post.reading_time);
        }

        view.element(Selector::PostContent)
            .ok_or(RenderError::MissingElement(Selector::PostContent.as_str()))?
            .set_inner_html(&post.html);

        if let Some(tags) = fm.tags().filter(|tags| !tags.is_empty()) {
            if let Some(el) = view.element(Selector::PostTags) {
                el.set_inner_html(&tag_list(tags));
            }
        }

        for button in view.share_buttons() {
            let url = button
                .attribute("data-platform")
                .and_then(|platform| post.share_url(platform));
            if let Some(url) = url {
                button.set_attribute("href", url);
            }
        }

        self.update_metadata(post, view);
        Ok(())
    }

    fn update_metadata<V: View + ?Sized>(&self, post: &RenderedPost, view: &mut V) {
        let title = post.title();
        let description = post.front_matter.description().unwrap_or_default();
        let image = post.featured_image.as_str();

        view.set_document_title(&format!("{} | {}", title, self.config.title));

        let tags = [
            (MetaAttr::Name, "description", description),
            (MetaAttr::Property, "og:title", title),
            (MetaAttr::Property, "og:description", description),
            (MetaAttr::Property, "og:image", image),
            (MetaAttr::Property, "og:url", post.page_url.as_str()),
            (MetaAttr::Name, "twitter:title", title),
            (MetaAttr::Name, "twitter:description", description),
            (MetaAttr::Name, "twitter:image", image),
        ];
        for (attr, key, content) in tags {
            view.upsert_meta(attr, key, content);
        }
    }

    /// Fetch, prepare and apply the post `slug`
    pub async fn render_post<V: View + ?Sized>(&self, slug: &str, view: &mut V) -> Result<RenderedPost> {
        let markdown = self.fetch_post(slug).await?;
        let page_url = view.location().href.clone();
        let post = self.prepare(slug, &markdown, &page_url);
        self.apply(&post, view)?;
        tracing::debug!("Rendered post {} ({})", slug, post.reading_time);
        Ok(post)
    }

    /// [`PostRenderer::render_post`], showing an error message on failure
    pub async fn render_post_or_error<V: View + ?Sized>(
        &self,
        slug: &str,
        view: &mut V,
    ) -> Option<RenderedPost> {
        match self.render_post(slug, view).await {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::error!("Error rendering post {}: {}", slug, e);
                self.show_error(view, POST_ERROR_MESSAGE);
                None
            }
        }
    }

    /// Replace the content area with an error message
    pub fn show_error<V: View + ?Sized>(&self, view: &mut V, message: &str) {
        if let Some(el) = view.element(Selector::PostContent) {
            el.set_inner_html(&error_message(message, &self.config.posts_dir));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemoryFetcher;
    use crate::view::{Element, Location, PageView};

    const POST: &str = r#"---
title: "Finding Calm"
description: A short story
date: March 3, 2024
datetime: 2024-03-03
featuredImage: anxiety-journey
tags:
- health
- life
---
# Breathe

One two three four.
"#;

    fn renderer(fetcher: MemoryFetcher) -> PostRenderer {
        PostRenderer::new(Arc::new(fetcher), &SiteConfig::default())
    }

    fn page() -> PageView {
        PageView::post_page(Location::new("https://example.com", "/posts/finding-calm/"))
    }

    fn text(page: &PageView, selector: Selector) -> String {
        page.slot(selector).unwrap().inner_html().to_string()
    }

    #[tokio::test]
    async fn test_render_post() {
        let renderer = renderer(MemoryFetcher::new().with("/content/blog/finding-calm.md", POST));
        let mut page = page();

        let post = renderer.render_post("finding-calm", &mut page).await.unwrap();
        assert_eq!(post.title(), "Finding Calm");

        assert_eq!(text(&page, Selector::PostTitle), "Finding Calm");
        assert_eq!(text(&page, Selector::PostDate), "March 3, 2024");
        assert_eq!(
            page.slot(Selector::PostDate).unwrap().attribute("datetime"),
            Some("2024-03-03")
        );
        assert_eq!(text(&page, Selector::PostAuthor), "Aniket Maithani");
        assert_eq!(text(&page, Selector::ReadingTimeValue), "1 min read");
        assert!(text(&page, Selector::PostContent).contains("<h1>Breathe</h1>"));
        assert!(text(&page, Selector::PostTags)
            .contains(r##"<a href="/tag/health" class="post-tag">#health</a>"##));

        let image = page.slot(Selector::PostFeaturedImage).unwrap();
        assert_eq!(
            image.attribute("src"),
            Some("https://source.unsplash.com/1200x600/?peaceful%20meditation%20mindfulness%20calm")
        );
        assert_eq!(image.attribute("alt"), Some("Finding Calm"));
    }

    #[tokio::test]
    async fn test_metadata_and_share_buttons() {
        let renderer = renderer(MemoryFetcher::new().with("/content/blog/finding-calm.md", POST));
        let mut page = page();
        page.upsert_meta(MetaAttr::Name, "description", "Site default");

        renderer.render_post("finding-calm", &mut page).await.unwrap();

        assert_eq!(page.title(), "Finding Calm | BerozgaarCoder");
        assert_eq!(page.meta_tags().len(), 8);
        assert_eq!(
            page.meta_content(MetaAttr::Name, "description"),
            Some("A short story")
        );
        assert_eq!(
            page.meta_content(MetaAttr::Property, "og:url"),
            Some("https://example.com/posts/finding-calm/")
        );
        assert_eq!(
            page.meta_content(MetaAttr::Name, "twitter:title"),
            Some("Finding Calm")
        );
        assert_eq!(
            page.share_button("facebook").unwrap().attribute("href"),
            Some("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fposts%2Ffinding-calm%2F")
        );
    }

    #[tokio::test]
    async fn test_unknown_share_platform_untouched() {
        let renderer = renderer(MemoryFetcher::new().with("/content/blog/finding-calm.md", POST));
        let mut page = PageView::new(Location::new("https://example.com", "/p/"))
            .with_slot(Selector::PostContent, Element::new("div"))
            .with_share_button("mastodon")
            .with_share_button("twitter");
        renderer.render_post("finding-calm", &mut page).await.unwrap();
        assert_eq!(
            page.share_button("mastodon").unwrap().attribute("href"),
            Some("#")
        );
        assert!(page
            .share_button("twitter")
            .unwrap()
            .attribute("href")
            .unwrap()
            .starts_with("https://twitter.com/intent/tweet?text=Finding%20Calm"));
        assert_eq!(page.title(), "Finding Calm | BerozgaarCoder");
    }

    #[tokio::test]
    async fn test_defaults_without_frontmatter() {
        let body = "Just a body.";
        let renderer = renderer(MemoryFetcher::new().with("/content/blog/plain.md", body));
        let mut page = page();

        let post = renderer.render_post("plain", &mut page).await.unwrap();
        assert_eq!(
            post.featured_image,
            "https://source.unsplash.com/1200x600/?coding%20developer%20workspace"
        );
        assert_eq!(text(&page, Selector::PostTitle), "");
        assert_eq!(text(&page, Selector::PostTags), "");
        assert!(text(&page, Selector::PostContent).contains("<p>Just a body.</p>"));
    }

    #[tokio::test]
    async fn test_not_found_then_rerender() {
        let mut fetcher = MemoryFetcher::new();
        fetcher.insert("/content/blog/finding-calm.md", POST);
        let renderer = renderer(fetcher);
        let mut page = page();

        let err = renderer.render_post("missing", &mut page).await.unwrap_err();
        assert!(matches!(err, RenderError::NotFound(ref slug) if slug == "missing"));

        assert!(renderer.render_post_or_error("missing", &mut page).await.is_none());
        let content = text(&page, Selector::PostContent);
        assert!(content.contains(POST_ERROR_MESSAGE));
        assert!(content.contains(r#"href="/posts/""#));

        renderer
            .render_post_or_error("finding-calm", &mut page)
            .await
            .unwrap();
        let content = text(&page, Selector::PostContent);
        assert!(!content.contains(POST_ERROR_MESSAGE));
        assert!(content.contains("<h1>Breathe</h1>"));
        assert_eq!(text(&page, Selector::PostTitle), "Finding Calm");
    }

    struct OfflineFetcher;

    #[async_trait::async_trait]
    impl Fetcher for OfflineFetcher {
        async fn fetch(&self, _path: &str) -> anyhow::Result<crate::fetch::Response> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_transport_failure_shows_error() {
        let renderer = PostRenderer::new(Arc::new(OfflineFetcher), &SiteConfig::default());
        let mut page = page();

        let err = renderer.render_post("finding-calm", &mut page).await.unwrap_err();
        assert!(matches!(
            err,
            RenderError::Transport { ref path, .. } if path == "/content/blog/finding-calm.md"
        ));

        assert!(renderer.render_post_or_error("finding-calm", &mut page).await.is_none());
        assert!(text(&page, Selector::PostContent).contains(POST_ERROR_MESSAGE));
        assert_eq!(text(&page, Selector::PostTitle), "");
    }

    #[tokio::test]
    async fn test_missing_content_slot_keeps_partial_updates() {
        let renderer = renderer(MemoryFetcher::new().with("/content/blog/finding-calm.md", POST));
        let mut page = page().without_slot(Selector::PostContent);

        let err = renderer.render_post("finding-calm", &mut page).await.unwrap_err();
        assert!(err.is_missing_element());
        assert_eq!(text(&page, Selector::PostTitle), "Finding Calm");
        assert!(page.meta_tags().is_empty());
    }

    #[test]
    fn test_prepare_reading_time_uses_body_only() {
        let renderer = renderer(MemoryFetcher::new());
        let words = vec!["word"; 400].join(" ");
        let source = format!("---\ntitle: T\nauthor: A\n---\n{}", words);
        let post = renderer.prepare("t", &source, "https://example.com/posts/t/");
        assert_eq!(post.reading_time, "2 min read");
        assert_eq!(
            post.share_url("twitter"),
            Some("https://twitter.com/intent/tweet?text=T&url=https%3A%2F%2Fexample.com%2Fposts%2Ft%2F")
        );
    }

    #[test]
    fn test_image_alt_and_author_override() {
        let renderer = renderer(MemoryFetcher::new());
        let source = "---\ntitle: T\nimageAlt: A sunrise\nauthor: Guest\n---\nBody\n";
        let post = renderer.prepare("t", source, "https://example.com/posts/t/");
        let mut page = page();
        renderer.apply(&post, &mut page).unwrap();
        assert_eq!(
            page.slot(Selector::PostFeaturedImage).unwrap().attribute("alt"),
            Some("A sunrise")
        );
        assert_eq!(text(&page, Selector::PostAuthor), "Guest");
    }
}
