//! Build static pages for every post and the home page

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::list::render_home;
use super::{render_page, POST_SHELL};
use crate::view::PageView;
use crate::Blog;

/// Render every markdown post under the post directory plus the home page
///
/// Returns the number of post pages written. Posts that fail to render are
/// logged and skipped.
pub async fn run(blog: &Blog) -> Result<usize> {
    let slugs = discover_posts(blog);
    tracing::info!("Found {} posts", slugs.len());

    let mut engine = blog.template_engine();
    engine.load_common_templates().await;
    let renderer = blog.post_renderer();

    let mut written = 0;
    for slug in &slugs {
        let mut page = PageView::post_page(blog.location(&blog.post_pathname(slug)));
        engine.inject_layout(&mut page);

        if let Err(e) = renderer.render_post(slug, &mut page).await {
            tracing::warn!("Skipping post {}: {}", slug, e);
            continue;
        }

        let html = render_page(&engine, "blog-post", POST_SHELL, &page);
        let output = blog
            .public_dir
            .join(blog.post_pathname(slug).trim_start_matches('/'))
            .join("index.html");
        write_file(&output, &html)?;
        written += 1;
    }

    let home = render_home(blog).await?;
    write_file(&blog.public_dir.join("index.html"), &home)?;

    tracing::info!("Wrote {} post pages to {:?}", written, blog.public_dir);
    Ok(written)
}

/// Slugs of the markdown files in the post directory, sorted
fn discover_posts(blog: &Blog) -> Vec<String> {
    let posts_dir = post_dir(blog);
    if !posts_dir.exists() {
        tracing::warn!("Post directory {:?} does not exist", posts_dir);
        return Vec::new();
    }

    let mut slugs: Vec<String> = WalkDir::new(&posts_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .filter_map(|e| {
            e.path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect();
    slugs.sort();
    slugs
}

/// Directory holding `{slug}.md` files, taken from the post path pattern
fn post_dir(blog: &Blog) -> PathBuf {
    let pattern = Path::new(blog.config.post_path.trim_start_matches('/'));
    match pattern.parent() {
        Some(parent) => blog.base_dir.join(parent),
        None => blog.base_dir.clone(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
