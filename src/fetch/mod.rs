//! Sources of raw site resources
//!
//! Every renderer reads through a [`Fetcher`], addressed by site-relative
//! paths such as `/posts.json`. A response carries the status code so callers
//! can tell a missing resource from a transport failure.

mod dir;
mod http;
mod memory;

pub use dir::DirFetcher;
pub use http::HttpFetcher;
pub use memory::MemoryFetcher;

use async_trait::async_trait;

use crate::error::{RenderError, Result};

/// A fetched resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP-style status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl Response {
    /// A `200` response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// An empty `404` response
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: String::new(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves site resources by path
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the resource at `path`
    ///
    /// Errors are reserved for transport failures; a missing resource is a
    /// response with a non-success status.
    async fn fetch(&self, path: &str) -> anyhow::Result<Response>;
}

/// Fetch `path`, mapping transport failures into [`RenderError::Transport`]
pub(crate) async fn fetch(fetcher: &dyn Fetcher, path: &str) -> Result<Response> {
    tracing::debug!("Fetching {}", path);
    fetcher
        .fetch(path)
        .await
        .map_err(|source| RenderError::Transport {
            path: path.to_string(),
            source,
        })
}

/// Fetch `path` and require a success status
pub(crate) async fn fetch_ok(fetcher: &dyn Fetcher, path: &str) -> Result<String> {
    let response = fetch(fetcher, path).await?;
    if !response.is_success() {
        return Err(RenderError::Fetch {
            path: path.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}
