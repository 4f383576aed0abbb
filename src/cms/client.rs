//! HTTP client for the content store query endpoint

use serde::Deserialize;
use serde_json::Value;
use std::future::Future;

use super::{FetchError, Query};
use crate::config::CmsConfig;

/// Something that can answer a content query
pub trait ContentSource {
    /// Run a query and return its result documents (empty if none)
    fn query(&self, query: &Query) -> impl Future<Output = Result<Vec<Value>, FetchError>> + Send;
}

/// Body of a query endpoint response
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Value>,
}

/// Query endpoint client
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl SanityClient {
    /// Create a client for the configured project and dataset
    pub fn new(config: &CmsConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("headless-blog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, config))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http(http: reqwest::Client, config: &CmsConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint(),
            token: config.token.clone(),
        }
    }

    /// Query endpoint URL, without query parameters
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        let mut request = self.http.get(&self.endpoint).query(&query.to_pairs());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body: QueryResponse = serde_json::from_slice(&bytes)?;
        Ok(match body.result {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![other],
        })
    }
}

impl ContentSource for SanityClient {
    async fn query(&self, query: &Query) -> Result<Vec<Value>, FetchError> {
        tracing::debug!("Querying {}", self.endpoint);
        let result = self.send(query).await;
        match &result {
            Ok(items) => tracing::debug!("Query returned {} documents", items.len()),
            Err(e) => tracing::error!("Error fetching from content store: {}", e),
        }
        result
    }
}
