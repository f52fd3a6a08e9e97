//! blog-renderer: markdown blog pages rendered through a page view
//!
//! This crate fetches markdown posts and a JSON post index, parses a small
//! front-matter header, converts markdown with pulldown-cmark and writes the
//! result into a [`view::View`]. Shared header/footer templates are loaded by
//! the [`templates::TemplateEngine`].

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod renderer;
pub mod templates;
pub mod view;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub use error::RenderError;

/// The blog application: configuration plus the source of site resources
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory of the site
    pub base_dir: std::path::PathBuf,
    /// Output directory for static builds
    pub public_dir: std::path::PathBuf,
    /// Where posts, the index and templates are fetched from
    pub fetcher: Arc<dyn fetch::Fetcher>,
}

impl Blog {
    /// Create a blog served from a local site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let fetcher = Arc::new(fetch::DirFetcher::new(&base_dir));
        Self::with_fetcher(base_dir, fetcher)
    }

    /// Create a blog reading its resources through `fetcher`
    ///
    /// Configuration is still read from `_config.yml` in `base_dir`.
    pub fn with_fetcher<P: AsRef<Path>>(base_dir: P, fetcher: Arc<dyn fetch::Fetcher>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            fetcher,
        })
    }

    /// A template engine with an empty cache
    pub fn template_engine(&self) -> templates::TemplateEngine {
        templates::TemplateEngine::new(Arc::clone(&self.fetcher), &self.config)
    }

    /// A renderer for single post pages
    pub fn post_renderer(&self) -> renderer::PostRenderer {
        renderer::PostRenderer::new(Arc::clone(&self.fetcher), &self.config)
    }

    /// A renderer for the latest-posts listing
    pub fn index_renderer(&self) -> renderer::IndexRenderer {
        renderer::IndexRenderer::new(Arc::clone(&self.fetcher), &self.config)
    }

    /// Location of a page on this site
    pub fn location(&self, pathname: &str) -> view::Location {
        view::Location::new(&self.config.url, pathname)
    }

    /// Site path of a post page, e.g. `/posts/hello/`
    pub fn post_pathname(&self, slug: &str) -> String {
        format!("{}{}/", self.config.posts_dir, slug)
    }
}
