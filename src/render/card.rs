//! Summary card for the list page

use super::{author_span, Renderer};
use crate::content::PostSummary;
use crate::helpers::{self, html_escape, CARD_IMAGE_FALLBACK};

impl Renderer {
    /// Render one post as a summary card
    pub fn card(&self, post: &PostSummary) -> String {
        let image = helpers::image_tag(
            post.image.as_deref(),
            &post.title,
            "blog-card-image",
            CARD_IMAGE_FALLBACK,
        );

        let category = post
            .category()
            .map(|c| format!(r#"<span class="blog-card-category">{}</span>"#, html_escape(c)))
            .unwrap_or_default();

        let tags = helpers::tag_spans(&post.tags)
            .map(|spans| format!(r#"<div class="blog-card-tags">{}</div>"#, spans))
            .unwrap_or_default();

        format!(
            r#"<div class="blog-card">
    {image}
    <div class="blog-card-content">
        <div class="blog-card-meta">
            <span>{date}</span>
            {author}
        </div>
        {category}
        <h2>{title}</h2>
        <p>{excerpt}</p>
        {tags}
        <a href="{href}" class="read-more">Read More →</a>
    </div>
</div>"#,
            date = self.date(post.published_at.as_deref()),
            author = author_span(post.author_name()),
            title = html_escape(&post.title),
            excerpt = html_escape(&post.excerpt),
            href = html_escape(&helpers::post_url(&self.post_page, &post.id)),
        )
    }

    /// Render every post as a card, in order
    pub fn cards(&self, posts: &[PostSummary]) -> String {
        posts.iter().map(|post| self.card(post)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Author;
    use crate::helpers::NO_IMAGE_PLACEHOLDER;

    fn full_post() -> PostSummary {
        PostSummary {
            id: "post-1".to_string(),
            title: "Hello <World>".to_string(),
            excerpt: "A \"quoted\" & short excerpt".to_string(),
            image: Some("https://cdn.example.com/a.png".to_string()),
            author: Some(Author {
                name: Some("Ada <Lovelace>".to_string()),
            }),
            published_at: Some("2024-03-15T00:00:00Z".to_string()),
            category: Some("News".to_string()),
            tags: vec!["rust".to_string(), "<b>".to_string()],
            ..PostSummary::default()
        }
    }

    #[test]
    fn test_card_full() {
        let html = Renderer::default().card(&full_post());
        assert!(html.contains("<span>March 15, 2024</span>"));
        assert!(html.contains("<span>By Ada &lt;Lovelace&gt;</span>"));
        assert!(html.contains(r#"<span class="blog-card-category">News</span>"#));
        assert!(html.contains("<h2>Hello &lt;World&gt;</h2>"));
        assert!(html.contains("<p>A &quot;quoted&quot; &amp; short excerpt</p>"));
        assert!(html.contains(r#"<span class="tag">&lt;b&gt;</span>"#));
        assert!(html.contains(r#"src="https://cdn.example.com/a.png""#));
        assert!(html.contains(r#"href="post.html?id=post-1""#));
        assert!(html.contains(CARD_IMAGE_FALLBACK));
    }

    #[test]
    fn test_card_escapes_all_text() {
        let post = PostSummary {
            id: "x".to_string(),
            title: "<script>".to_string(),
            excerpt: "<img src=x>".to_string(),
            category: Some("<i>".to_string()),
            tags: vec!["<u>".to_string()],
            ..PostSummary::default()
        };
        let html = Renderer::default().card(&post);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x>"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("<u>"));
    }

    #[test]
    fn test_card_missing_optionals() {
        let post = PostSummary {
            id: "post-2".to_string(),
            title: "Bare".to_string(),
            ..PostSummary::default()
        };
        let html = Renderer::default().card(&post);
        assert!(html.contains(&html_escape(NO_IMAGE_PLACEHOLDER)));
        assert!(!html.contains(r#"src="""#));
        assert!(!html.contains("By "));
        assert!(!html.contains("blog-card-category"));
        assert!(!html.contains("blog-card-tags"));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn test_card_link_encodes_id() {
        let post = PostSummary {
            id: "a b\"c".to_string(),
            ..PostSummary::default()
        };
        let html = Renderer::default().card(&post);
        assert!(html.contains(r#"href="post.html?id=a%20b%22c""#));
    }

    #[test]
    fn test_cards_keep_order() {
        let mut second = full_post();
        second.id = "post-2".to_string();
        second.title = "Second".to_string();
        let html = Renderer::default().cards(&[full_post(), second]);
        let first = html.find("post-1").unwrap();
        let second = html.find("post-2").unwrap();
        assert!(first < second);
    }
}
