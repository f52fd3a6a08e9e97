//! Content module - frontmatter, markdown and the post index

mod frontmatter;
mod markdown;
mod post;

pub use frontmatter::{Document, FrontMatter};
pub use markdown::MarkdownRenderer;
pub use post::{PostIndex, PostSummary};
