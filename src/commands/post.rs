//! Render a single post

use anyhow::Result;

use super::{render_page, POST_SHELL};
use crate::view::PageView;
use crate::Blog;

/// Render the post `slug` as a complete HTML page
///
/// A post that cannot be rendered still produces a page, with the error
/// message in the content area.
pub async fn run(blog: &Blog, slug: &str) -> Result<String> {
    let mut engine = blog.template_engine();
    engine.load_common_templates().await;

    let mut page = PageView::post_page(blog.location(&blog.post_pathname(slug)));
    engine.inject_layout(&mut page);

    if blog
        .post_renderer()
        .render_post_or_error(slug, &mut page)
        .await
        .is_none()
    {
        tracing::warn!("Post {} rendered with an error message", slug);
    }

    Ok(render_page(&engine, "blog-post", POST_SHELL, &page))
}
