//! gazzetta-yahoo
//!
//! `NewsAdapter` over the Yahoo Finance search endpoint.
#![warn(missing_docs)]

mod wire;

use std::time::Duration;

use async_trait::async_trait;
use gazzetta_core::{AdapterKey, GazzettaError, NewsAdapter, RawArticle};
use url::Url;

pub(crate) const NAME: &str = "gazzetta-yahoo";

/// Production host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const SEARCH_PATH: &str = "/v1/finance/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// Yahoo answers 429 to the default reqwest agent
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Adapter for Yahoo Finance news.
#[derive(Clone)]
pub struct YahooAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self::new_default()
    }
}

impl YahooAdapter {
    /// Static adapter key.
    pub const KEY: AdapterKey = AdapterKey::new(NAME);

    /// Build with a fresh HTTP client carrying a browser user agent.
    #[must_use]
    pub fn new_default() -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self::new_with_client(http)
    }

    /// Build from an existing `reqwest::Client`.
    ///
    /// Note: Yahoo throttles clients without a browser-like user agent.
    #[must_use]
    pub fn new_with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the adapter at another host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, query: &str, limit: usize) -> Result<Url, GazzettaError> {
        let mut url = Url::parse(&format!("{}{SEARCH_PATH}", self.base_url))
            .map_err(|e| GazzettaError::InvalidArg(format!("bad base url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("newsCount", &limit.max(1).to_string())
            .append_pair("quotesCount", "0");
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
impl NewsAdapter for YahooAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazzetta::yahoo", skip(self), err)
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
        Ok(wire::SearchResponse::from_slice(&body)?.into_articles(limit))
    }
}
