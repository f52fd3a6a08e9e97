//! Post index model (`posts.json`)

use serde::{Deserialize, Serialize};

/// Listing metadata for one post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSummary {
    pub title: String,
    pub url: String,
    pub image: String,
    pub excerpt: String,
    /// Display date
    pub date: String,
    /// Machine-readable date for the `datetime` attribute
    pub datetime: String,
    /// Posts are hidden unless explicitly published
    pub published: bool,
}

/// The post index document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIndex {
    pub posts: Vec<PostSummary>,
}

impl PostIndex {
    /// Parse the index from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Published posts in index order, at most `limit`
    pub fn latest(&self, limit: usize) -> Vec<&PostSummary> {
        self.posts
            .iter()
            .filter(|post| post.published)
            .take(limit)
            .collect()
    }
}
