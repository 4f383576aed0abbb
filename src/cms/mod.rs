//! Content store access
//!
//! Queries are GROQ expressions sent to a read-only query endpoint. The
//! [`ContentSource`] trait is the fetch boundary the page controllers
//! depend on; [`SanityClient`] is the HTTP implementation.

mod client;
mod error;
mod query;

pub use client::{ContentSource, SanityClient};
pub use error::FetchError;
pub use query::{list_posts, post_by_id, Query};
