//! Render the list or detail page to a file or stdout

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::cms::ContentSource;
use crate::controller::PageState;
use crate::helpers::encode_component;
use crate::{Blog, Page};

/// Render the list page
pub async fn index<S: ContentSource>(blog: &Blog<S>, output: Option<&Path>) -> Result<()> {
    let page = blog.list_page().await;
    finish(page, output)
}

/// Render the detail page of one post
pub async fn post<S: ContentSource>(blog: &Blog<S>, id: &str, output: Option<&Path>) -> Result<()> {
    let page = blog.post_page(&format!("id={}", encode_component(id))).await;
    finish(page, output)
}

/// Write the page, then fail if the controller ended in an error
fn finish(page: Page, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &page.html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.html.as_bytes())?;
            stdout.flush()?;
        }
    }

    match page.state {
        PageState::Errored(reason) => anyhow::bail!("Page rendered with an error: {:?}", reason),
        _ => Ok(()),
    }
}
