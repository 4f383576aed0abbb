//! List published posts

use anyhow::Result;

use crate::cms::{self, ContentSource};
use crate::content::PostSummary;
use crate::helpers;
use crate::Blog;

/// Print one line per published post, newest first
pub async fn run<S: ContentSource>(blog: &Blog<S>) -> Result<()> {
    let documents = blog.source().query(&cms::list_posts()).await?;
    let posts = documents
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<PostSummary>, _>>()?;

    let tz = blog.config.tz()?;
    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", summary_line(post, tz));
    }

    Ok(())
}

fn summary_line(post: &PostSummary, tz: chrono_tz::Tz) -> String {
    let mut line = format!(
        "  {} - {} [{}]",
        helpers::format_date(post.published_at.as_deref(), tz),
        post.title,
        post.id
    );
    if let Some(category) = post.category() {
        line.push_str(&format!(" ({})", category));
    }
    if !post.tags.is_empty() {
        line.push_str(&format!(" #{}", post.tags.join(" #")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let post = PostSummary {
            id: "p1".to_string(),
            title: "Hello".to_string(),
            published_at: Some("2024-03-15T00:00:00Z".to_string()),
            category: Some("news".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
            ..PostSummary::default()
        };
        assert_eq!(
            summary_line(&post, chrono_tz::Tz::UTC),
            "  March 15, 2024 - Hello [p1] (news) #a #b"
        );
    }
}
