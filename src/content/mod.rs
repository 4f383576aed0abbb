//! Content module - post records and body conversion

mod body;
mod markdown;
mod post;

pub use body::{blocks_to_markdown, render_body, NO_CONTENT_HTML};
pub use markdown::MarkdownRenderer;
pub use post::{Author, Block, Body, PostDetail, PostSummary, Slug, Span};
