//! Page controllers
//!
//! Each page load runs one controller: fetch once, render, then replace
//! the container content. Every failure path ends with a visible, escaped
//! message in the container.

mod container;
mod detail;
mod list;

#[cfg(test)]
pub(crate) mod fake;

pub use container::{Container, HtmlContainer};
pub use detail::DetailController;
pub use list::ListController;

/// Why a page ended in [`PageState::Errored`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// The page URL carried no post identifier
    MissingId,
    /// The content store had no published post with that identifier
    NotFound,
    /// The request failed or the response could not be read
    Fetch,
}

/// Lifecycle of one page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Rendered,
    Errored(PageError),
}
