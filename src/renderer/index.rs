//! Latest-posts listing

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{PostIndex, PostSummary};
use crate::error::{RenderError, Result};
use crate::fetch::{self, Fetcher};
use crate::view::{Selector, View};

/// Shown in the listing when the index cannot be loaded
pub const INDEX_ERROR_HTML: &str = "<p>Unable to load posts at this time.</p>";

/// Renders the newest published posts as cards
pub struct IndexRenderer {
    fetcher: Arc<dyn Fetcher>,
    index_path: String,
    limit: usize,
}

impl IndexRenderer {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &SiteConfig) -> Self {
        Self {
            fetcher,
            index_path: config.index_path.clone(),
            limit: config.latest_posts_limit,
        }
    }

    /// Fetch and parse the post index
    pub async fn fetch_index(&self) -> Result<PostIndex> {
        let json = fetch::fetch_ok(self.fetcher.as_ref(), &self.index_path).await?;
        Ok(PostIndex::from_json(&json)?)
    }

    /// Replace the listing with cards for the latest published posts
    ///
    /// Returns the number of cards rendered. Pages without a listing are
    /// skipped before anything is fetched.
    pub async fn render_latest<V: View + ?Sized>(&self, view: &mut V) -> Result<usize> {
        if view.element(Selector::LatestPostsContainer).is_none() {
            return Err(RenderError::MissingElement(
                Selector::LatestPostsContainer.as_str(),
            ));
        }

        let index = self.fetch_index().await?;
        let posts = index.latest(self.limit);

        let container = view
            .element(Selector::LatestPostsContainer)
            .ok_or(RenderError::MissingElement(
                Selector::LatestPostsContainer.as_str(),
            ))?;
        container.set_inner_html("");
        for post in &posts {
            container.append_html(&post_card(post));
        }

        tracing::debug!("Rendered {} of {} posts", posts.len(), index.posts.len());
        Ok(posts.len())
    }

    /// [`IndexRenderer::render_latest`], showing a message on failure
    pub async fn render_latest_or_error<V: View + ?Sized>(&self, view: &mut V) -> usize {
        match self.render_latest(view).await {
            Ok(count) => count,
            Err(e) if e.is_missing_element() => {
                tracing::debug!("No post listing on this page: {}", e);
                0
            }
            Err(e) => {
                tracing::error!("Error loading posts: {}", e);
                if let Some(container) = view.element(Selector::LatestPostsContainer) {
                    container.set_inner_html(INDEX_ERROR_HTML);
                }
                0
            }
        }
    }
}

/// Card markup for one post
pub fn post_card(post: &PostSummary) -> String {
    format!(
        r#"<article class="post-card">
  <a href="{url}" class="post-link">
    <div class="post-image">
      <img src="{image}" alt="{title}">
    </div>
    <div class="post-content">
      <h3 class="post-title">{title}</h3>
      <time datetime="{datetime}">{date}</time>
      <p class="post-excerpt">{excerpt}</p>
      <span class="read-more">Read More →</span>
    </div>
  </a>
</article>
"#,
        url = post.url,
        image = post.image,
        title = post.title,
        datetime = post.datetime,
        date = post.date,
        excerpt = post.excerpt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemoryFetcher;
    use crate::view::{Element, Location, PageView};
    use serde_json::json;

    fn index_json(published: &[bool]) -> String {
        let posts: Vec<_> = published
            .iter()
            .enumerate()
            .map(|(i, published)| {
                json!({
                    "title": format!("Post {}", i),
                    "url": format!("/posts/post-{}/", i),
                    "image": format!("/img/{}.jpg", i),
                    "excerpt": "Excerpt",
                    "date": "Jan 1, 2024",
                    "datetime": "2024-01-01",
                    "published": published,
                })
            })
            .collect();
        json!({ "posts": posts }).to_string()
    }

    fn renderer(fetcher: MemoryFetcher) -> IndexRenderer {
        IndexRenderer::new(Arc::new(fetcher), &SiteConfig::default())
    }

    fn page() -> PageView {
        PageView::index_page(Location::new("https://example.com", "/"))
            .with_slot(
                Selector::LatestPostsContainer,
                Element::new("div")
                    .with_attribute("id", "latest-posts-container")
                    .with_inner_html("<article>placeholder</article>"),
            )
    }

    fn card_titles(page: &PageView) -> Vec<String> {
        let html = page
            .slot(Selector::LatestPostsContainer)
            .unwrap()
            .inner_html();
        html.split(r#"<h3 class="post-title">"#)
            .skip(1)
            .filter_map(|s| s.split("</h3>").next())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_only_published_in_order() {
        let published = [true, false, true, false, true, false, true];
        let renderer = renderer(MemoryFetcher::new().with("/posts.json", index_json(&published)));
        let mut page = page();

        assert_eq!(renderer.render_latest(&mut page).await.unwrap(), 4);
        assert_eq!(
            card_titles(&page),
            vec!["Post 0", "Post 2", "Post 4", "Post 6"]
        );
        let html = page.slot(Selector::LatestPostsContainer).unwrap().inner_html();
        assert!(!html.contains("placeholder"));
    }

    #[tokio::test]
    async fn test_capped_at_five() {
        let renderer = renderer(MemoryFetcher::new().with("/posts.json", index_json(&[true; 6])));
        let mut page = page();

        assert_eq!(renderer.render_latest(&mut page).await.unwrap(), 5);
        assert_eq!(
            card_titles(&page),
            vec!["Post 0", "Post 1", "Post 2", "Post 3", "Post 4"]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_message() {
        let renderer = renderer(MemoryFetcher::new().with_status("/posts.json", 500));
        let mut page = page();

        assert_eq!(renderer.render_latest_or_error(&mut page).await, 0);
        assert_eq!(
            page.slot(Selector::LatestPostsContainer).unwrap().inner_html(),
            INDEX_ERROR_HTML
        );
    }

    #[tokio::test]
    async fn test_malformed_index() {
        let renderer = renderer(MemoryFetcher::new().with("/posts.json", "{ not json"));
        let mut page = page();

        let err = renderer.render_latest(&mut page).await.unwrap_err();
        assert!(matches!(err, RenderError::MalformedIndex(_)));

        renderer.render_latest_or_error(&mut page).await;
        assert_eq!(
            page.slot(Selector::LatestPostsContainer).unwrap().inner_html(),
            INDEX_ERROR_HTML
        );
    }

    #[tokio::test]
    async fn test_missing_container_skips_fetch() {
        let fetcher = Arc::new(MemoryFetcher::new().with("/posts.json", index_json(&[true])));
        let renderer = IndexRenderer::new(fetcher.clone(), &SiteConfig::default());
        let mut page = PageView::new(Location::new("https://example.com", "/about/"));

        let err = renderer.render_latest(&mut page).await.unwrap_err();
        assert!(err.is_missing_element());
        assert_eq!(renderer.render_latest_or_error(&mut page).await, 0);
        assert_eq!(fetcher.request_count("/posts.json"), 0);
    }

    #[test]
    fn test_post_card() {
        let post = PostSummary {
            title: "Hello".to_string(),
            url: "/posts/hello/".to_string(),
            image: "/img/hello.jpg".to_string(),
            excerpt: "Short".to_string(),
            date: "Jan 2, 2024".to_string(),
            datetime: "2024-01-02".to_string(),
            published: true,
        };
        let card = post_card(&post);
        assert!(card.starts_with(r#"<article class="post-card">"#));
        assert!(card.contains(r#"<a href="/posts/hello/" class="post-link">"#));
        assert!(card.contains(r#"<img src="/img/hello.jpg" alt="Hello">"#));
        assert!(card.contains(r#"<time datetime="2024-01-02">Jan 2, 2024</time>"#));
        assert!(card.contains(r#"<p class="post-excerpt">Short</p>"#));
    }
}
