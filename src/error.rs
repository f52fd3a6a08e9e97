//! Error types shared by the renderers

use thiserror::Error;

/// Result alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failure of a single rendering stage
#[derive(Debug, Error)]
pub enum RenderError {
    /// The markdown source for a post answered with a non-success status
    #[error("post not found: {0}")]
    NotFound(String),

    /// Any other resource answered with a non-success status
    #[error("failed to fetch {path}: status {status}")]
    Fetch { path: String, status: u16 },

    /// The fetcher could not produce a response at all
    #[error("failed to fetch {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// A named template could not be retrieved
    #[error("failed to load template {name} from {locator}")]
    TemplateLoad { name: String, locator: String },

    /// The post index was not valid JSON or did not match the schema
    #[error("malformed post index: {0}")]
    MalformedIndex(#[from] serde_json::Error),

    /// A required view slot is absent
    #[error("missing element: {0}")]
    MissingElement(&'static str),
}

impl RenderError {
    /// Whether this error means a required slot is absent from the view
    pub fn is_missing_element(&self) -> bool {
        matches!(self, RenderError::MissingElement(_))
    }
}
