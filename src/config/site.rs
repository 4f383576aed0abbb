//! Site configuration (_config.yml)

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ConfigError;

/// Environment variable that overrides `cms.token`
pub const TOKEN_ENV: &str = "HEADLESS_BLOG_TOKEN";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    /// IANA zone used when formatting publication dates; empty means UTC
    pub timezone: String,

    // Content store
    #[serde(default)]
    pub cms: CmsConfig,

    // Page layout
    #[serde(default)]
    pub pages: PagesConfig,

    /// Directory of stylesheets and images served next to rendered pages
    pub static_dir: Option<String>,
    /// Stylesheet linked from every page, e.g. `/css/style.css`
    pub stylesheet: Option<String>,

    // Markdown
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            language: "en".to_string(),
            timezone: String::new(),
            cms: CmsConfig::default(),
            pages: PagesConfig::default(),
            static_dir: None,
            stylesheet: None,
            markdown: MarkdownConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, then apply environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        config.apply_token_override(std::env::var(TOKEN_ENV).ok());
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Replace the configured token with one supplied at deploy time
    pub fn apply_token_override(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.cms.token = Some(token);
        }
    }

    /// Check that the content store can be addressed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cms.project_id.trim().is_empty() && self.cms.api_url.is_none() {
            return Err(ConfigError::Validation(
                "cms.project_id is required unless cms.api_url is set".to_string(),
            ));
        }
        if self.cms.dataset.trim().is_empty() {
            return Err(ConfigError::Validation("cms.dataset is empty".to_string()));
        }
        let post_page = self.pages.post_page.trim().trim_start_matches('/');
        if post_page.is_empty() || post_page == "index.html" {
            return Err(ConfigError::Validation(format!(
                "pages.post_page `{}` collides with the list page",
                self.pages.post_page
            )));
        }
        self.tz()?;
        Ok(())
    }

    /// Resolve the display timezone
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        if self.timezone.trim().is_empty() {
            return Ok(Tz::UTC);
        }
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::Validation(format!("unknown timezone: {}", self.timezone)))
    }
}

/// Headless CMS query endpoint settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Host suffix appended to the project id
    pub api_host: String,
    /// Full base URL, replaces `https://{project_id}.{api_host}` when set
    pub api_url: Option<String>,
    /// Read token sent as a bearer credential
    pub token: Option<String>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            api_host: "api.sanity.io".to_string(),
            api_url: None,
            token: None,
        }
    }
}

impl CmsConfig {
    /// Base URL of the content API
    pub fn base_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.{}", self.project_id, self.api_host),
        }
    }

    /// Query endpoint for the configured dataset
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.base_url(),
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }
}

impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("api_host", &self.api_host)
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Container ids and page paths
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub list_container: String,
    pub post_container: String,
    /// Detail page that "Read More" links point to
    pub post_page: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            list_container: "blog-container".to_string(),
            post_container: "post-container".to_string(),
            post_page: "post.html".to_string(),
        }
    }
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Highlight fenced code blocks
    pub highlight: bool,
    pub theme: String,
    pub line_number: bool,
    /// Pass raw HTML in post bodies through instead of escaping it
    pub raw_html: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
            raw_html: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.cms.dataset, "production");
        assert_eq!(config.pages.post_page, "post.html");
        assert!(config.cms.token.is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
timezone: America/New_York
cms:
  project_id: abc123
  dataset: staging
pages:
  post_page: article.html
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.cms.project_id, "abc123");
        assert_eq!(config.cms.dataset, "staging");
        assert_eq!(config.cms.api_version, "2024-01-01");
        assert_eq!(config.pages.post_page, "article.html");
        assert_eq!(config.pages.list_container, "blog-container");
        assert_eq!(config.tz().unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_endpoint() {
        let mut cms = CmsConfig {
            project_id: "abc123".to_string(),
            ..CmsConfig::default()
        };
        assert_eq!(
            cms.endpoint(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );

        cms.api_url = Some("http://127.0.0.1:9000/".to_string());
        assert_eq!(
            cms.endpoint(),
            "http://127.0.0.1:9000/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_validate() {
        let mut config = SiteConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        config.cms.project_id = "abc123".to_string();
        assert!(config.validate().is_ok());

        config.timezone = "Mars/Olympus".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_post_page_collision() {
        let mut config = SiteConfig::default();
        config.cms.project_id = "abc123".to_string();

        for post_page in ["index.html", "/index.html", "/", ""] {
            config.pages.post_page = post_page.to_string();
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{post_page:?} should be rejected"
            );
        }

        config.pages.post_page = "/post.html".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_override() {
        let mut config = SiteConfig::default();
        config.cms.token = Some("from-file".to_string());

        config.apply_token_override(Some("  ".to_string()));
        assert_eq!(config.cms.token.as_deref(), Some("from-file"));

        config.apply_token_override(Some("from-env".to_string()));
        assert_eq!(config.cms.token.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let cms = CmsConfig {
            token: Some("secret-token".to_string()),
            ..CmsConfig::default()
        };
        let debug = format!("{:?}", cms);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "cms:\n  project_id: abc123\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.cms.project_id, "abc123");

        let missing = SiteConfig::load(dir.path().join("missing.yml"));
        assert!(matches!(missing, Err(ConfigError::Io(_, _))));
    }
}
