//! List the latest published posts

use anyhow::Result;

use super::{render_page, INDEX_SHELL};
use crate::view::{PageView, Selector, View};
use crate::Blog;

/// Print the latest published posts, or their card markup with `html`
pub async fn run(blog: &Blog, html: bool) -> Result<()> {
    if html {
        let mut page = PageView::index_page(blog.location("/"));
        blog.index_renderer().render_latest(&mut page).await?;
        if let Some(container) = page.slot(Selector::LatestPostsContainer) {
            println!("{}", container.inner_html());
        }
        return Ok(());
    }

    let index = blog.index_renderer().fetch_index().await?;
    let latest = index.latest(blog.config.latest_posts_limit);
    println!("Posts ({} of {}):", latest.len(), index.posts.len());
    for post in latest {
        println!("  {} - {} [{}]", post.date, post.title, post.url);
    }

    Ok(())
}

/// Render the home page with the latest posts
pub async fn render_home(blog: &Blog) -> Result<String> {
    let mut engine = blog.template_engine();
    engine.load_common_templates().await;
    let locator = engine.locator("index");
    engine.try_load_template("index", &locator).await;

    let mut page = PageView::index_page(blog.location("/"));
    page.set_document_title(&blog.config.title);
    engine.inject_layout(&mut page);
    blog.index_renderer().render_latest_or_error(&mut page).await;

    Ok(render_page(&engine, "index", INDEX_SHELL, &page))
}
