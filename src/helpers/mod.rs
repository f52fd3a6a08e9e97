//! Helper functions shared by the renderers

mod html;
mod text;
mod url;

pub use html::*;
pub use text::*;
pub use url::*;
