//! Detail page controller

use super::{Container, PageError, PageState};
use crate::cms::{self, ContentSource, FetchError};
use crate::content::PostDetail;
use crate::helpers;
use crate::render::Renderer;

/// Shown when the page URL has no `id`
pub const NO_POST_ID: &str = "No post ID provided.";

/// Shown when no published post matches the `id`
pub const POST_NOT_FOUND: &str = "Post not found.";

/// Heading of the detail page error panel
pub const POST_ERROR: &str = "Error loading post";

/// Renders a single post selected by the `id` query parameter
pub struct DetailController<'a, S> {
    source: &'a S,
    renderer: &'a Renderer,
}

impl<'a, S: ContentSource> DetailController<'a, S> {
    pub fn new(source: &'a S, renderer: &'a Renderer) -> Self {
        Self { source, renderer }
    }

    /// Read the post id from `query_string`, fetch the post and render it
    pub async fn load<C: Container>(&self, query_string: &str, container: &mut C) -> PageState {
        let Some(id) = helpers::query_param(query_string, "id").filter(|id| !id.is_empty()) else {
            container.replace(helpers::notice("error", NO_POST_ID));
            return PageState::Errored(PageError::MissingId);
        };

        match self.fetch(&id).await {
            Ok(Some(post)) => {
                tracing::info!("Rendering post {}", id);
                container.replace(self.renderer.post(&post));
                PageState::Rendered
            }
            Ok(None) => {
                tracing::info!("Post {} not found", id);
                container.replace(helpers::notice("error", POST_NOT_FOUND));
                PageState::Errored(PageError::NotFound)
            }
            Err(e) => {
                tracing::error!("Error loading post {}: {}", id, e);
                container.replace(helpers::error_panel(POST_ERROR, &e.to_string()));
                PageState::Errored(PageError::Fetch)
            }
        }
    }

    async fn fetch(&self, id: &str) -> Result<Option<PostDetail>, FetchError> {
        let documents = self.source.query(&cms::post_by_id(id)).await?;
        match documents.into_iter().next() {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }
}
