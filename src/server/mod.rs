//! Preview server rendering pages on request

use anyhow::Result;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cms::ContentSource;
use crate::controller::{PageError, PageState};
use crate::{Blog, Page};

/// Build the router: list page at `/`, detail page at the configured path
pub fn router<S>(blog: Arc<Blog<S>>) -> Router
where
    S: ContentSource + Send + Sync + 'static,
{
    let post_route = format!("/{}", blog.config.pages.post_page.trim_start_matches('/'));
    let static_dir = blog
        .config
        .static_dir
        .as_ref()
        .map(|dir| blog.base_dir.join(dir));

    let router = Router::new()
        .route("/", get(list_handler::<S>))
        .route("/index.html", get(list_handler::<S>))
        .route(&post_route, get(post_handler::<S>));

    let router = match static_dir {
        Some(dir) => {
            tracing::debug!("Serving static files from {:?}", dir);
            router.fallback_service(ServeDir::new(dir))
        }
        None => router.fallback(not_found),
    };

    router.layer(TraceLayer::new_for_http()).with_state(blog)
}

/// Start the preview server
pub async fn start<S>(blog: Blog<S>, ip: &str, port: u16, open: bool) -> Result<()>
where
    S: ContentSource + Send + Sync + 'static,
{
    let app = router(Arc::new(blog));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_handler<S>(State(blog): State<Arc<Blog<S>>>) -> Response
where
    S: ContentSource + Send + Sync + 'static,
{
    respond(blog.list_page().await)
}

async fn post_handler<S>(
    State(blog): State<Arc<Blog<S>>>,
    RawQuery(query): RawQuery,
) -> Response
where
    S: ContentSource + Send + Sync + 'static,
{
    respond(blog.post_page(query.as_deref().unwrap_or("")).await)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// HTTP status for the state a page ended in
fn status_for(state: PageState) -> StatusCode {
    match state {
        PageState::Loading | PageState::Rendered => StatusCode::OK,
        PageState::Errored(PageError::MissingId) => StatusCode::BAD_REQUEST,
        PageState::Errored(PageError::NotFound) => StatusCode::NOT_FOUND,
        PageState::Errored(PageError::Fetch) => StatusCode::BAD_GATEWAY,
    }
}

fn respond(page: Page) -> Response {
    (status_for(page.state), Html(page.html)).into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
