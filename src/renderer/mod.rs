//! Page renderers: a single post and the latest-posts listing
//!
//! Each renderer exposes its pipeline as typed stages returning
//! [`RenderError`](crate::error::RenderError), plus an `_or_error` wrapper
//! that logs the failure and shows a fixed message in the page instead.

mod index;
mod post;

pub use index::{post_card, IndexRenderer, INDEX_ERROR_HTML};
pub use post::{PostRenderer, RenderedPost, POST_ERROR_MESSAGE};
