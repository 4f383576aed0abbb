//! List page controller

use super::{Container, PageError, PageState};
use crate::cms::{self, ContentSource, FetchError};
use crate::content::PostSummary;
use crate::helpers;
use crate::render::Renderer;

/// Message shown when no posts are published
pub const NO_POSTS: &str = "No blog posts available.";

/// Heading of the list page error panel
pub const LIST_ERROR: &str = "Error loading blog posts";

/// Renders published posts as cards, newest first
pub struct ListController<'a, S> {
    source: &'a S,
    renderer: &'a Renderer,
}

impl<'a, S: ContentSource> ListController<'a, S> {
    pub fn new(source: &'a S, renderer: &'a Renderer) -> Self {
        Self { source, renderer }
    }

    /// Fetch the posts and render them into `container`
    pub async fn load<C: Container>(&self, container: &mut C) -> PageState {
        match self.fetch().await {
            Ok(posts) if posts.is_empty() => {
                tracing::info!("No published posts");
                container.replace(helpers::notice("no-posts", NO_POSTS));
                PageState::Rendered
            }
            Ok(posts) => {
                tracing::info!("Rendering {} posts", posts.len());
                container.replace(self.renderer.cards(&posts));
                PageState::Rendered
            }
            Err(e) => {
                tracing::error!("Error loading blog posts: {}", e);
                container.replace(helpers::error_panel(LIST_ERROR, &e.to_string()));
                PageState::Errored(PageError::Fetch)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<PostSummary>, FetchError> {
        let documents = self.source.query(&cms::list_posts()).await?;
        documents
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(FetchError::from))
            .collect()
    }
}
