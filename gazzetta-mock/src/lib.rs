use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gazzetta_core::{GazzettaError, NewsAdapter, RawArticle};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockAdapter, DynamicMockController, MockBehavior};

/// Wire shape the fixture records are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFlavor {
    /// `source.name`, `urlToImage`, RFC 3339 `publishedAt`.
    NewsApi,
    /// `publisher`, `link`, epoch `providerPublishTime`.
    Yahoo,
    /// `banner_image`, compact `time_published`, `summary`.
    AlphaVantage,
}

/// Mock adapter for CI-safe demos. Serves deterministic data from static fixtures.
///
/// Known tickers are `AAPL`, `MSFT` and `TSLA`; anything else yields no
/// articles. The queries `FAIL`, `TIMEOUT` and `PANIC` force a provider error,
/// a 200ms delay and a panic respectively.
pub struct MockAdapter {
    name: &'static str,
    flavor: MockFlavor,
}

impl Default for MockAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdapter {
    /// NewsAPI-shaped mock named `gazzetta-mock`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: "gazzetta-mock",
            flavor: MockFlavor::NewsApi,
        }
    }

    /// Mock with a custom name and wire shape.
    #[must_use]
    pub const fn with_flavor(name: &'static str, flavor: MockFlavor) -> Self {
        Self { name, flavor }
    }

    /// Wire shape this mock emits.
    #[must_use]
    pub const fn flavor(&self) -> MockFlavor {
        self.flavor
    }

    async fn maybe_fail_or_timeout(&self, query: &str) -> Result<(), GazzettaError> {
        match query {
            "FAIL" => Err(GazzettaError::provider(self.name, "forced failure")),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            "PANIC" => panic!("{}: forced panic", self.name),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl NewsAdapter for MockAdapter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        self.maybe_fail_or_timeout(query).await?;
        let mut records = fixtures::news::by_symbol(query, self.flavor, Utc::now());
        records.truncate(limit);
        Ok(records)
    }
}
