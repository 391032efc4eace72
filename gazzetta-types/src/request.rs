//! Inbound request and cache key types.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of articles returned when the caller does not ask for a count.
pub const DEFAULT_LIMIT: usize = 5;

/// A request for the latest news about one company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsRequest {
    query: String,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_limit"
    )]
    limit: usize,
    #[serde(default)]
    force_refresh: bool,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

// Same floor as `NewsRequest::limit`.
fn deserialize_limit<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    usize::deserialize(d).map(|n| n.max(1))
}

impl NewsRequest {
    /// Request for `query` with the default limit and no forced refresh.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            force_refresh: false,
        }
    }

    /// Maximum number of articles to return. Zero is clamped to one.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Discard any live cache entry for this key before reading through.
    #[must_use]
    pub const fn force_refresh(mut self, yes: bool) -> Self {
        self.force_refresh = yes;
        self
    }

    /// Query string, usually a ticker symbol.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Requested article count.
    #[must_use]
    pub const fn requested_limit(&self) -> usize {
        self.limit
    }

    /// Whether a refresh was requested.
    #[must_use]
    pub const fn is_force_refresh(&self) -> bool {
        self.force_refresh
    }

    /// Cache key derived from `(query, limit)`.
    #[must_use]
    pub fn key(&self) -> NewsKey {
        NewsKey {
            query: self.query.clone(),
            limit: self.limit,
        }
    }
}

/// Cache key for one company-news result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsKey {
    /// Query string exactly as requested.
    pub query: String,
    /// Requested article count.
    pub limit: usize,
}

impl fmt::Display for NewsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "company_news_{}_{}", self.query, self.limit)
    }
}
