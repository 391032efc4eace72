//! gazzetta-newsapi
//!
//! `NewsAdapter` over the newsapi.org `everything` endpoint.
#![warn(missing_docs)]

mod wire;

use std::time::Duration;

use async_trait::async_trait;
use gazzetta_core::{AdapterKey, GazzettaError, NewsAdapter, RawArticle};
use url::Url;

pub(crate) const NAME: &str = "gazzetta-newsapi";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "NEWSAPI_API_KEY";
/// Production host.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

const EVERYTHING_PATH: &str = "/v2/everything";
// NewsAPI rejects larger pages
const MAX_PAGE_SIZE: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter for newsapi.org.
///
/// Each call issues one `GET /v2/everything?q=..&pageSize=..&sortBy=publishedAt&language=en`
/// with the key in the `X-Api-Key` header.
#[derive(Clone)]
pub struct NewsApiAdapter {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NewsApiAdapter {
    /// Static adapter key.
    pub const KEY: AdapterKey = AdapterKey::new(NAME);

    /// Build with a fresh HTTP client and a 10s request timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::new_with_client(http, api_key)
    }

    /// Build from an existing `reqwest::Client`.
    #[must_use]
    pub fn new_with_client(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build from the key in `NEWSAPI_API_KEY`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the variable is unset or blank.
    pub fn from_env() -> Result<Self, GazzettaError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(GazzettaError::InvalidArg(format!(
                "{API_KEY_ENV} is not set"
            ))),
        }
    }

    /// Point the adapter at another host, e.g. a proxy or a test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, query: &str, limit: usize) -> Result<Url, GazzettaError> {
        let mut url = Url::parse(&format!("{}{EVERYTHING_PATH}", self.base_url))
            .map_err(|e| GazzettaError::InvalidArg(format!("bad base url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("pageSize", &limit.clamp(1, MAX_PAGE_SIZE).to_string())
            .append_pair("sortBy", "publishedAt")
            .append_pair("language", "en");
        Ok(url)
    }
}

fn transport_error(e: reqwest::Error) -> GazzettaError {
    if e.is_timeout() {
        GazzettaError::provider_timeout(NAME)
    } else {
        GazzettaError::provider(NAME, e.to_string())
    }
}

#[async_trait]
impl NewsAdapter for NewsApiAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazzetta::newsapi", skip(self), err)
    )]
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        let url = self.endpoint(query, limit)?;
        let resp = self
            .http
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GazzettaError::status(NAME, status.as_u16()));
        }
        let body = resp.bytes().await.map_err(transport_error)?;
        let articles = wire::Envelope::from_slice(&body)?.into_articles(limit)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(count = articles.len(), "newsapi articles received");
        Ok(articles)
    }
}
