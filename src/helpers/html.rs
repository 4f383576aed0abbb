//! HTML helper functions

/// Placeholder shown when a post has no featured image
pub const NO_IMAGE_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"250\"%3E%3Crect fill=\"%23e0e0e0\" width=\"400\" height=\"250\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" dy=\".3em\" fill=\"%23999\" font-size=\"20\" font-family=\"sans-serif\"%3ENo Image%3C/text%3E%3C/svg%3E";

/// Load-failure fallback for card images
pub const CARD_IMAGE_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22400%22 height=%22250%22%3E%3Crect fill=%22%23e0e0e0%22 width=%22400%22 height=%22250%22/%3E%3C/svg%3E";

/// Load-failure fallback for the detail page image
pub const POST_IMAGE_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22800%22 height=%22500%22%3E%3Crect fill=%22%23e0e0e0%22 width=%22800%22 height=%22500%22/%3E%3C/svg%3E";

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an image tag with a placeholder and a load-failure fallback
///
/// A missing or blank `src` renders [`NO_IMAGE_PLACEHOLDER`]. `fallback`
/// must not contain `"` or `'` since it sits inside the `onerror` script.
///
/// # Examples
/// ```ignore
/// image_tag(None, "Title", "blog-card-image", CARD_IMAGE_FALLBACK)
/// ```
pub fn image_tag(src: Option<&str>, alt: &str, class: &str, fallback: &str) -> String {
    let src = src
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(NO_IMAGE_PLACEHOLDER);

    format!(
        r#"<img src="{}" alt="{}" class="{}" onerror="this.onerror=null;this.src='{}'">"#,
        html_escape(src),
        html_escape(alt),
        class,
        fallback
    )
}

/// Render tags as `<span class="tag">` elements, `None` when there are none
pub fn tag_spans(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
            .collect(),
    )
}

/// Error panel with a heading and an escaped message
pub fn error_panel(heading: &str, message: &str) -> String {
    format!(
        r#"<div class="error"><strong>{}</strong><p>{}</p></div>"#,
        html_escape(heading),
        html_escape(message)
    )
}

/// Single-line notice in a `div` of the given class
pub fn notice(class: &str, message: &str) -> String {
    format!(r#"<div class="{}">{}</div>"#, class, html_escape(message))
}
