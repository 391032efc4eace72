use std::sync::Arc;
use std::time::Duration;

use gazzetta_core::{AdapterFailure, AggregateReport, FanOutStrategy, GazzettaError, NewsAdapter};
use gazzetta_types::RawArticle;
use tokio::task::JoinHandle;

use crate::util::join_in_order;

/// Ordered collection of adapters queried together.
///
/// Adapters are called with the same `(query, limit)` and their results are
/// concatenated in registration order, each adapter's own order preserved.
/// A failing, hanging (with a timeout configured) or panicking adapter is
/// recorded in the report and never aborts the fan-out.
pub struct Aggregator {
    adapters: Vec<Arc<dyn NewsAdapter>>,
    strategy: FanOutStrategy,
    adapter_timeout: Option<Duration>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    /// An aggregator with no adapters, concurrent fan-out and no per-call timeout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adapters: Vec::new(),
            strategy: FanOutStrategy::Concurrent,
            adapter_timeout: None,
        }
    }

    /// Append an adapter. Registration order is merge order.
    ///
    /// Registering the same adapter twice queries it twice.
    pub fn register(&mut self, adapter: Arc<dyn NewsAdapter>) {
        self.adapters.push(adapter);
    }

    /// Select how adapters are invoked.
    pub const fn set_strategy(&mut self, strategy: FanOutStrategy) {
        self.strategy = strategy;
    }

    /// Bound each adapter call; `None` leaves timeouts to the adapters.
    pub const fn set_adapter_timeout(&mut self, timeout: Option<Duration>) {
        self.adapter_timeout = timeout;
    }

    /// Registered adapters in registration order.
    #[must_use]
    pub fn adapters(&self) -> &[Arc<dyn NewsAdapter>] {
        &self.adapters
    }

    /// Number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// True when no adapter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Query every adapter and merge what comes back.
    ///
    /// Never fails. Each failed adapter is logged at `warn` and listed in
    /// `errors`; when every adapter fails the combined failure is logged at
    /// `error` and `articles` is empty. With no adapters registered the report
    /// is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gazzetta::aggregator",
            skip(self),
            fields(adapters = self.adapters.len(), strategy = ?self.strategy),
        )
    )]
    pub async fn aggregate(&self, query: &str, limit: usize) -> AggregateReport {
        let limit = limit.max(1);
        let results = match self.strategy {
            FanOutStrategy::Sequential => {
                let mut out = Vec::with_capacity(self.adapters.len());
                for adapter in &self.adapters {
                    let handle = self.spawn_call(adapter, query, limit);
                    out.extend(join_in_order(vec![(adapter.name(), handle)]).await);
                }
                out
            }
            _ => {
                let handles = self
                    .adapters
                    .iter()
                    .map(|a| (a.name(), self.spawn_call(a, query, limit)))
                    .collect();
                join_in_order(handles).await
            }
        };

        let mut report = AggregateReport {
            attempted: results.len(),
            ..AggregateReport::default()
        };
        for (index, (name, res)) in results.into_iter().enumerate() {
            match res {
                Ok(articles) => report.articles.extend(articles),
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(adapter = name, index, error = %error, "news adapter failed");
                    report.errors.push(AdapterFailure {
                        adapter: name.to_string(),
                        index,
                        error,
                    });
                }
            }
        }

        #[cfg(feature = "tracing")]
        if let Some(failure) = report.failure() {
            tracing::error!(
                query,
                error = %crate::util::collapse_errors(failure.flatten()),
                "all news adapters failed"
            );
        }
        report
    }

    fn spawn_call(
        &self,
        adapter: &Arc<dyn NewsAdapter>,
        query: &str,
        limit: usize,
    ) -> JoinHandle<Result<Vec<RawArticle>, GazzettaError>> {
        let adapter = Arc::clone(adapter);
        let query = query.to_string();
        let timeout = self.adapter_timeout;
        tokio::spawn(async move {
            let name = adapter.name();
            let call = adapter.fetch(&query, limit);
            match timeout {
                Some(t) => tokio::time::timeout(t, call)
                    .await
                    .unwrap_or_else(|_| Err(GazzettaError::provider_timeout(name))),
                None => call.await,
            }
        })
    }
}
