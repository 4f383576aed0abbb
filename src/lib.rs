//! headless-blog: render a blog from a headless CMS
//!
//! Posts are queried from a read-only CMS endpoint, rendered to HTML with
//! every CMS-supplied string escaped, and written into a page container.
//! The same two page controllers back the CLI output and the preview
//! server.

pub mod cms;
pub mod commands;
pub mod config;
pub mod content;
pub mod controller;
pub mod helpers;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cms::{ContentSource, SanityClient};
use crate::controller::{DetailController, HtmlContainer, ListController, PageState};
use crate::render::Renderer;

/// Default configuration file name
pub const CONFIG_FILE: &str = "_config.yml";

/// A rendered page and the state its controller ended in
#[derive(Debug, Clone)]
pub struct Page {
    pub state: PageState,
    /// Content of the container alone
    pub body: String,
    /// Complete HTML document
    pub html: String,
}

/// The main application
pub struct Blog<S = SanityClient> {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    source: S,
    renderer: Renderer,
}

impl Blog<SanityClient> {
    /// Create a blog from `_config.yml` in `base_dir`, or from `config_path`
    pub fn new<P: AsRef<Path>>(base_dir: P, config_path: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = match config_path {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => base_dir.join(path),
            None => base_dir.join(CONFIG_FILE),
        };

        let config = config::SiteConfig::load(&config_path)?;
        let source = SanityClient::new(&config.cms)?;
        tracing::debug!("Using content endpoint {}", source.endpoint());
        Self::with_source(base_dir, config, source)
    }
}

impl<S: ContentSource> Blog<S> {
    /// Create a blog around any content source
    pub fn with_source(base_dir: PathBuf, config: config::SiteConfig, source: S) -> Result<Self> {
        let renderer = Renderer::new(&config)?;
        Ok(Self {
            config,
            base_dir,
            source,
            renderer,
        })
    }

    /// The content source posts are read from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render the list page
    pub async fn list_page(&self) -> Page {
        let mut container =
            HtmlContainer::new(&self.config.pages.list_container, templates::LOADING_HTML);
        let state = ListController::new(&self.source, &self.renderer)
            .load(&mut container)
            .await;
        self.page(state, container)
    }

    /// Render the detail page for a page URL query string (`?id=...`)
    pub async fn post_page(&self, query_string: &str) -> Page {
        let mut container =
            HtmlContainer::new(&self.config.pages.post_container, templates::LOADING_HTML);
        let state = DetailController::new(&self.source, &self.renderer)
            .load(query_string, &mut container)
            .await;
        self.page(state, container)
    }

    fn page(&self, state: PageState, container: HtmlContainer) -> Page {
        let html = templates::page_shell(
            &self.config.title,
            &self.config.language,
            container.id(),
            container.html(),
            self.config.stylesheet.as_deref(),
        );
        Page {
            state,
            body: container.into_html(),
            html,
        }
    }
}
