//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Site name, appended to every document title
    pub title: String,
    /// Base URL pages are published under
    pub url: String,
    /// Author shown when a post does not name one
    pub author: String,

    // Reading
    pub words_per_minute: usize,
    pub latest_posts_limit: usize,

    // Resource paths
    pub post_path: String,
    pub index_path: String,
    pub template_path: String,
    pub common_templates: Vec<String>,
    /// Section whose sub-paths all highlight the posts nav link
    pub posts_dir: String,

    // Featured images
    pub image_service: String,
    pub image_keywords: IndexMap<String, String>,

    // Output
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let image_keywords = [
            ("invoice-automation", "python code laptop automation"),
            ("anxiety-journey", "peaceful meditation mindfulness calm"),
            ("recovery-journey", "sunrise hope healing recovery"),
            ("progress-update", "progress growth career success"),
            ("default", "coding developer workspace"),
        ]
        .into_iter()
        .map(|(name, keyword)| (name.to_string(), keyword.to_string()))
        .collect();

        Self {
            title: "BerozgaarCoder".to_string(),
            url: "http://localhost:8000".to_string(),
            author: "Aniket Maithani".to_string(),

            words_per_minute: 200,
            latest_posts_limit: 5,

            post_path: "/content/blog/{slug}.md".to_string(),
            index_path: "/posts.json".to_string(),
            template_path: "/templates/{name}.html".to_string(),
            common_templates: vec![
                "header".to_string(),
                "footer".to_string(),
                "blog-post".to_string(),
            ],
            posts_dir: "/posts/".to_string(),

            image_service: "https://source.unsplash.com/1200x600/?".to_string(),
            image_keywords,

            public_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
