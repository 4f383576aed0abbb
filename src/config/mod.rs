//! Configuration module

mod error;
mod site;

pub use error::ConfigError;
pub use site::CmsConfig;
pub use site::MarkdownConfig;
pub use site::PagesConfig;
pub use site::SiteConfig;
pub use site::TOKEN_ENV;
