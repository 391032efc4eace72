//! gazzetta-alphavantage
//!
//! `NewsAdapter` over the Alpha Vantage `NEWS_SENTIMENT` function.
#![warn(missing_docs)]

mod wire;

use std::time::Duration;

use async_trait::async_trait;
use gazzetta_core::{AdapterKey, GazzettaError, NewsAdapter, RawArticle};
use url::Url;

pub(crate) const NAME: &str = "gazzetta-alphavantage";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
/// Production host.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

const QUERY_PATH: &str = "/query";
// upper bound accepted by NEWS_SENTIMENT
const MAX_LIMIT: usize = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter for Alpha Vantage news and sentiment.
///
/// The query is sent as the `tickers` filter, so it should be a ticker symbol.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageAdapter {
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

    /// Build from the key in `ALPHAVANTAGE_API_KEY`.
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

    /// Point the adapter at another host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, query: &str, limit: usize) -> Result<Url, GazzettaError> {
        let mut url = Url::parse(&format!("{}{QUERY_PATH}", self.base_url))
            .map_err(|e| GazzettaError::InvalidArg(format!("bad base url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("function", "NEWS_SENTIMENT")
            .append_pair("tickers", &query.to_uppercase())
            .append_pair("sort", "LATEST")
            .append_pair("limit", &limit.clamp(1, MAX_LIMIT).to_string())
            .append_pair("apikey", &self.api_key);
        Ok(url)
    }
}

fn transport_error(e: reqwest::Error) -> GazzettaError {
    if e.is_timeout() {
        GazzettaError::provider_timeout(NAME)
    } else {
        // strip the url so the key never lands in logs
        GazzettaError::provider(NAME, e.without_url().to_string())
    }
}

#[async_trait]
impl NewsAdapter for AlphaVantageAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Alpha Vantage"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazzetta::alphavantage", skip(self), err)
    )]
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        let url = self.endpoint(query, limit)?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GazzettaError::status(NAME, status.as_u16()));
        }
        let body = resp.bytes().await.map_err(transport_error)?;
        wire::NewsSentiment::from_slice(&body)?.into_articles(limit)
    }
}
