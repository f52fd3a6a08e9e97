//! Fetching from a local site directory

use anyhow::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{Fetcher, Response};

/// Serves site resources from a directory on disk
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve a site path inside the root, refusing to leave it
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl Fetcher for DirFetcher {
    async fn fetch(&self, path: &str) -> Result<Response> {
        let Some(file) = self.resolve(path) else {
            tracing::warn!("Refusing to fetch {:?} outside the site root", path);
            return Ok(Response::not_found());
        };

        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(Response::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Response::not_found()),
            Err(e) => Err(e.into()),
        }
    }
}
