//! HTML fragments for posts
//!
//! All CMS-supplied text passes through [`html_escape`](crate::helpers::html_escape)
//! before it is inserted. Optional fields that are missing omit their
//! element instead of rendering it empty.

mod card;
mod post;

use chrono_tz::Tz;

use crate::config::SiteConfig;
use crate::content::MarkdownRenderer;
use crate::helpers;

/// Renders posts into HTML fragments
pub struct Renderer {
    tz: Tz,
    post_page: String,
    markdown: MarkdownRenderer,
}

impl Renderer {
    /// Create a renderer from site configuration
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        Ok(Self {
            tz: config.tz()?,
            post_page: config.pages.post_page.clone(),
            markdown: MarkdownRenderer::with_options(&config.markdown),
        })
    }

    /// Display date for a post
    fn date(&self, published_at: Option<&str>) -> String {
        helpers::format_date(published_at, self.tz)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            tz: Tz::UTC,
            post_page: "post.html".to_string(),
            markdown: MarkdownRenderer::new(),
        }
    }
}

/// `<span>By {author}</span>`, if the post has one
fn author_span(name: Option<&str>) -> String {
    name.map(|n| format!("<span>By {}</span>", helpers::html_escape(n)))
        .unwrap_or_default()
}
