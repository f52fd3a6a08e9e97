//! In-memory fetcher

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{Fetcher, Response};

/// Serves resources from a fixed map and records every request
///
/// Paths without an entry answer `404`.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 at `path`
    pub fn with(mut self, path: &str, body: impl Into<String>) -> Self {
        self.responses.insert(path.to_string(), Response::ok(body));
        self
    }

    /// Answer `path` with an empty body and the given status
    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(
            path.to_string(),
            Response {
                status,
                body: String::new(),
            },
        );
        self
    }

    /// Replace or add the body served at `path`
    pub fn insert(&mut self, path: &str, body: impl Into<String>) {
        self.responses.insert(path.to_string(), Response::ok(body));
    }

    /// Number of times `path` has been requested
    pub fn request_count(&self, path: &str) -> usize {
        self.requests
            .lock()
            .map(|requests| requests.iter().filter(|p| *p == path).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<Response> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_string());
        }
        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(Response::not_found))
    }
}
