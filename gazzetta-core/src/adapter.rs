use async_trait::async_trait;

pub use gazzetta_types::AdapterKey;
use gazzetta_types::{GazzettaError, RawArticle};

/// One external news source translated into loosely-typed records.
///
/// Implementations perform the outbound call and emit records carrying
/// whatever title/url/source/timestamp-ish keys the provider uses. They do not
/// cache, deduplicate or normalize field names; the validator owns that.
///
/// Failures (transport errors, non-success responses, unreadable payloads)
/// are returned as `GazzettaError` tagged with [`NewsAdapter::name`]. The
/// aggregator isolates them so one adapter never aborts a fan-out.
#[async_trait]
pub trait NewsAdapter: Send + Sync {
    /// A stable identifier used in logs and failure reports (e.g. "gazzetta-newsapi").
    fn name(&self) -> &'static str;

    /// Canonical adapter key constructed from the static name.
    fn key(&self) -> AdapterKey {
        AdapterKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch at most `limit` recent articles about `query`, in provider order.
    ///
    /// `limit` is always at least one.
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawArticle>, GazzettaError>;
}
