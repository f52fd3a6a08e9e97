//! CLI commands

pub mod build;
pub mod list;
pub mod post;

use crate::templates::TemplateEngine;
use crate::view::PageView;

/// Built-in page shell for posts, used when the site has no `blog-post` template
const POST_SHELL: &str = include_str!("shell/post.html");

/// Built-in page shell for the home page, used when the site has no `index` template
const INDEX_SHELL: &str = include_str!("shell/index.html");

/// Serialize a page through the site template `name`, or the built-in shell
fn render_page(engine: &TemplateEngine, name: &str, fallback: &str, page: &PageView) -> String {
    let shell = engine.get(name).unwrap_or_else(|| {
        tracing::debug!("No {} template loaded, using the built-in shell", name);
        fallback
    });
    TemplateEngine::fill(shell, &page.to_context())
}
