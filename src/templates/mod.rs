//! Page shell around a rendered container

use crate::helpers::html_escape;

/// Shown in a container before its controller has rendered
pub const LOADING_HTML: &str = r#"<div class="loading">Loading…</div>"#;

/// Wrap container content in a complete HTML document
///
/// `stylesheet` is linked when the site serves static assets.
pub fn page_shell(
    title: &str,
    language: &str,
    container_id: &str,
    inner_html: &str,
    stylesheet: Option<&str>,
) -> String {
    let stylesheet = stylesheet
        .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(href)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="generator" content="headless-blog {version}">
    <title>{title}</title>
    {stylesheet}
</head>
<body>
    <main id="{id}">{inner}</main>
</body>
</html>
"#,
        lang = html_escape(language),
        version = env!("CARGO_PKG_VERSION"),
        title = html_escape(title),
        stylesheet = stylesheet,
        id = html_escape(container_id),
        inner = inner_html,
    )
}
