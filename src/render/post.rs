//! Full post for the detail page

use super::{author_span, Renderer};
use crate::content::{self, PostDetail};
use crate::helpers::{self, html_escape, POST_IMAGE_FALLBACK};

impl Renderer {
    /// Render the header, featured image, body and tag list of a post
    pub fn post(&self, post: &PostDetail) -> String {
        let summary = &post.summary;

        let category = summary
            .category()
            .map(|c| format!(r#"<span class="post-category">{}</span>"#, html_escape(c)))
            .unwrap_or_default();

        let image = helpers::image_tag(
            summary.image.as_deref(),
            &summary.title,
            "post-image",
            POST_IMAGE_FALLBACK,
        );

        format!(
            r#"<div class="post-header">
    <div class="post-meta">
        <span>{date}</span>
        {author}
    </div>
    {category}
    <h1 class="post-title">{title}</h1>
</div>
{image}
<div class="post-content" id="post-content-inner">{content}</div>"#,
            date = self.date(summary.published_at.as_deref()),
            author = author_span(summary.author_name()),
            title = html_escape(&summary.title),
            content = self.post_content(post),
        )
    }

    /// Converted body followed by the tag list
    pub fn post_content(&self, post: &PostDetail) -> String {
        let mut html = content::render_body(post.content.as_ref(), &self.markdown);
        if let Some(spans) = helpers::tag_spans(&post.summary.tags) {
            html.push_str(&format!(r#"<div class="post-tags">{}</div>"#, spans));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, Block, Body, PostSummary, Span, NO_CONTENT_HTML};
    use crate::helpers::NO_IMAGE_PLACEHOLDER;

    fn post(content: Option<Body>) -> PostDetail {
        PostDetail {
            summary: PostSummary {
                id: "p1".to_string(),
                title: "Deep <Dive>".to_string(),
                author: Some(Author {
                    name: Some("Grace".to_string()),
                }),
                published_at: Some("2024-03-15T00:00:00Z".to_string()),
                category: Some("Guides".to_string()),
                tags: vec!["rust".to_string()],
                ..PostSummary::default()
            },
            content,
        }
    }

    #[test]
    fn test_post_header() {
        let html = Renderer::default().post(&post(None));
        assert!(html.contains(r#"<h1 class="post-title">Deep &lt;Dive&gt;</h1>"#));
        assert!(html.contains("<span>March 15, 2024</span>"));
        assert!(html.contains("<span>By Grace</span>"));
        assert!(html.contains(r#"<span class="post-category">Guides</span>"#));
        assert!(html.contains(&html_escape(NO_IMAGE_PLACEHOLDER)));
        assert!(html.contains(POST_IMAGE_FALLBACK));
    }

    #[test]
    fn test_post_without_content() {
        let html = Renderer::default().post(&post(None));
        assert!(html.contains(NO_CONTENT_HTML));
        assert!(html.contains(r#"<div class="post-tags"><span class="tag">rust</span></div>"#));
    }

    #[test]
    fn test_post_markdown_content() {
        let html =
            Renderer::default().post(&post(Some(Body::Markdown("Some *text*".to_string()))));
        assert!(html.contains("<em>text</em>"));
        let body = html.find("<em>text</em>").unwrap();
        let tags = html.find("post-tags").unwrap();
        assert!(body < tags);
    }

    #[test]
    fn test_post_block_content() {
        let blocks = vec![Block {
            kind: "block".to_string(),
            style: Some("h3".to_string()),
            children: vec![Span {
                text: Some("Section".to_string()),
            }],
        }];
        let html = Renderer::default().post(&post(Some(Body::Blocks(blocks))));
        assert!(html.contains("<h3>Section</h3>"));
    }

    #[test]
    fn test_post_missing_optionals() {
        let bare = PostDetail {
            summary: PostSummary {
                id: "p2".to_string(),
                ..PostSummary::default()
            },
            content: None,
        };
        let html = Renderer::default().post(&bare);
        assert!(!html.contains("By "));
        assert!(!html.contains("post-category"));
        assert!(!html.contains("post-tags"));
        assert!(html.contains("Invalid Date"));
    }
}
