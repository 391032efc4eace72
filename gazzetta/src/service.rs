use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use gazzetta_core::{
    AggregateReport, Article, CacheConfig, CacheStore, FanOutStrategy, GazzettaConfig,
    GazzettaError, NewsAdapter, NewsKey, NewsRequest, process,
};

use crate::aggregator::Aggregator;

/// Cache backend holding ranked results per `(query, limit)`.
pub type NewsStore = Arc<dyn CacheStore<NewsKey, Arc<Vec<Article>>>>;

/// Company-news service: aggregate, validate, dedupe, rank, cache.
pub struct Gazzetta {
    pub(crate) aggregator: Arc<Aggregator>,
    pub(crate) store: NewsStore,
    pub(crate) cfg: GazzettaConfig,
}

/// Builder for constructing a `Gazzetta` service with custom configuration.
pub struct GazzettaBuilder {
    aggregator: Aggregator,
    cfg: GazzettaConfig,
    store: Option<NewsStore>,
}

impl Default for GazzettaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GazzettaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no adapters; you must register at least one via [`Self::with_adapter`].
    /// - Defaults: concurrent fan-out, no per-adapter timeout, in-memory cache with a
    ///   300s TTL and room for 1000 `(query, limit)` entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aggregator: Aggregator::new(),
            cfg: GazzettaConfig::default(),
            store: None,
        }
    }

    /// Register a news adapter.
    ///
    /// Behavior and trade-offs:
    /// - Registration order decides merge order, and merge order decides which copy
    ///   of a near-duplicate story survives: earlier adapters win.
    /// - Duplicates are not detected; registering the same adapter twice doubles its load.
    #[must_use]
    pub fn with_adapter(mut self, adapter: Arc<dyn NewsAdapter>) -> Self {
        self.aggregator.register(adapter);
        self
    }

    /// Select how adapters are invoked.
    ///
    /// Behavior and trade-offs:
    /// - `Concurrent`: every adapter runs at once; latency is that of the slowest
    ///   adapter.
    /// - `Sequential`: one adapter at a time; latency adds up but outbound load is
    ///   spread out.
    /// - Either way the merged order is registration order.
    #[must_use]
    pub const fn fan_out(mut self, strategy: FanOutStrategy) -> Self {
        self.cfg.fan_out = strategy;
        self
    }

    /// Bound every adapter call.
    ///
    /// Behavior and trade-offs:
    /// - A call exceeding the bound is recorded as `ProviderTimeout` and contributes
    ///   nothing; its siblings are unaffected.
    /// - Adapters built on `reqwest` already carry their own timeout; this guards
    ///   adapters that do not.
    #[must_use]
    pub const fn adapter_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.adapter_timeout = Some(timeout);
        self
    }

    /// Configure the built-in result cache.
    ///
    /// Behavior and trade-offs:
    /// - A zero TTL disables caching; every request recomputes.
    /// - Ignored when a custom store is supplied via [`Self::cache_store`].
    #[must_use]
    pub fn cache_config(mut self, cache: CacheConfig) -> Self {
        self.cfg.cache = cache;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: GazzettaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Use a custom cache backend instead of the built-in in-memory store.
    #[must_use]
    pub fn cache_store(mut self, store: NewsStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the `Gazzetta` service.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no adapters have been registered via [`Self::with_adapter`].
    pub fn build(mut self) -> Result<Gazzetta, GazzettaError> {
        if self.aggregator.is_empty() {
            return Err(GazzettaError::InvalidArg(
                "no adapters registered; add at least one via with_adapter(...)".to_string(),
            ));
        }
        self.aggregator.set_strategy(self.cfg.fan_out);
        self.aggregator.set_adapter_timeout(self.cfg.adapter_timeout);
        let store = self
            .store
            .unwrap_or_else(|| gazzetta_cache::store_for(&self.cfg.cache));
        Ok(Gazzetta {
            aggregator: Arc::new(self.aggregator),
            store,
            cfg: self.cfg,
        })
    }
}

impl Gazzetta {
    /// Start building a new `Gazzetta` service.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use gazzetta::{Gazzetta, NewsRequest};
    ///
    /// let news = Gazzetta::builder()
    ///     .with_adapter(Arc::new(NewsApiAdapter::new("key")))
    ///     .with_adapter(Arc::new(YahooAdapter::new_default()))
    ///     .adapter_timeout(std::time::Duration::from_secs(8))
    ///     .build()?;
    ///
    /// let top = news.company_news(NewsRequest::new("AAPL")).await;
    /// ```
    #[must_use]
    pub fn builder() -> GazzettaBuilder {
        GazzettaBuilder::new()
    }

    /// Wrap an already-populated aggregator.
    ///
    /// The aggregator keeps whatever strategy and timeout it was given; the
    /// cache is built from `cfg.cache`.
    #[must_use]
    pub fn from_aggregator(aggregator: Aggregator, cfg: GazzettaConfig) -> Self {
        let store = gazzetta_cache::store_for(&cfg.cache);
        Self {
            aggregator: Arc::new(aggregator),
            store,
            cfg,
        }
    }

    /// The configuration this service was built with.
    #[must_use]
    pub const fn config(&self) -> &GazzettaConfig {
        &self.cfg
    }

    /// The underlying aggregator.
    #[must_use]
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Latest news for one company, at most `req.limit` articles.
    ///
    /// Behavior:
    /// - Results are cached per `(query, limit)`; a live entry is returned as is.
    /// - `force_refresh` drops the entry first, so the result is always freshly computed.
    /// - On a miss, every adapter is queried, records are validated, near-duplicate
    ///   titles are dropped and the rest are ranked today-first, newest-first.
    /// - Never fails. Adapter failures shrink the result; if everything fails, or the
    ///   computation panics, the result is empty (and is cached like any other).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gazzetta::service",
            skip(self, req),
            fields(
                query = req.query(),
                limit = req.requested_limit(),
                force_refresh = req.is_force_refresh(),
            ),
        )
    )]
    pub async fn company_news(&self, req: NewsRequest) -> Vec<Article> {
        let key = req.key();
        if req.is_force_refresh() {
            #[cfg(feature = "tracing")]
            tracing::info!(key = %key, "forced cache refresh for company news");
            self.store.delete(&key).await;
        }

        let compute = Self::compute(Arc::clone(&self.aggregator), key.clone());
        let articles = self.store.get_or_compute(key, compute).await;
        Vec::clone(&articles)
    }

    /// Drop the cached result for `(query, limit)`, if any.
    pub async fn invalidate(&self, query: &str, limit: usize) {
        let key = NewsRequest::new(query).limit(limit).key();
        self.store.delete(&key).await;
    }

    /// Run the fan-out alone, bypassing the cache and the pipeline.
    pub async fn aggregate(&self, query: &str, limit: usize) -> AggregateReport {
        self.aggregator.aggregate(query, limit).await
    }

    fn compute(
        aggregator: Arc<Aggregator>,
        key: NewsKey,
    ) -> futures::future::BoxFuture<'static, Arc<Vec<Article>>> {
        let work = async move {
            #[cfg(feature = "tracing")]
            tracing::info!(key = %key, "cache miss for company news");
            let report = aggregator.aggregate(&key.query, key.limit).await;
            process(&report.articles, key.limit)
        };
        AssertUnwindSafe(work)
            .catch_unwind()
            .map(|res| {
                Arc::new(res.unwrap_or_else(|_panic| {
                    #[cfg(feature = "tracing")]
                    tracing::error!("company news computation panicked; returning no articles");
                    Vec::new()
                }))
            })
            .boxed()
    }
}
