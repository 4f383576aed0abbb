//! Helper functions shared by the page renderers
//!
//! Escaping, date formatting, image fallback and URL handling live here
//! so both controllers render CMS content the same way.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
