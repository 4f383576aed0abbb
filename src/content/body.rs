//! Post body to HTML conversion

use super::markdown::MarkdownRenderer;
use super::post::{Block, Body};

/// Shown when a post has no usable body
pub const NO_CONTENT_HTML: &str = "<p>No content available.</p>";

/// `_type` of blocks that carry text
const TEXT_BLOCK: &str = "block";

impl Body {
    /// Flatten the body to markdown source
    pub fn to_markdown(&self) -> String {
        match self {
            Body::Markdown(markdown) => markdown.clone(),
            Body::Blocks(blocks) => blocks_to_markdown(blocks),
        }
    }
}

/// Convert an optional body to HTML
pub fn render_body(body: Option<&Body>, renderer: &MarkdownRenderer) -> String {
    match body {
        None => NO_CONTENT_HTML.to_string(),
        Some(Body::Markdown(markdown)) if markdown.is_empty() => NO_CONTENT_HTML.to_string(),
        Some(body) => renderer.render(&body.to_markdown()),
    }
}

/// Join text blocks into markdown paragraphs
///
/// Blocks of any other type contribute an empty line.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_line)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_to_line(block: &Block) -> String {
    if block.kind != TEXT_BLOCK {
        tracing::debug!("Skipping unsupported block type: {}", block.kind);
        return String::new();
    }

    let text: String = block
        .children
        .iter()
        .filter_map(|span| span.text.as_deref())
        .collect();

    match block.style.as_deref().and_then(heading_level) {
        Some(level) => format!("{} {}", "#".repeat(level), text),
        None => text,
    }
}

/// Heading level of a style like `h2`
fn heading_level(style: &str) -> Option<usize> {
    style
        .strip_prefix('h')?
        .parse::<usize>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}
