//! Configuration types shared across the service and its adapters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the aggregator issues a query to its registered adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FanOutStrategy {
    /// Spawn every adapter call at once and join the results in registration order.
    #[default]
    Concurrent,
    /// Call adapters one after another in registration order.
    Sequential,
}

/// Configuration of the result cache sitting in front of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of a computed entry. `Duration::ZERO` disables caching.
    pub ttl: Duration,
    /// Upper bound on the number of live `(query, limit)` entries.
    pub max_entries: u64,
}

impl CacheConfig {
    /// Lifetime of a cached company-news result.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
    /// Default capacity of the in-memory store.
    pub const DEFAULT_MAX_ENTRIES: u64 = 1_000;

    /// Returns `None` when caching is disabled.
    #[must_use]
    pub fn effective_ttl(&self) -> Option<Duration> {
        (!self.ttl.is_zero()).then_some(self.ttl)
    }

    /// Capacity with a floor of one entry.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.max_entries.max(1)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Self::DEFAULT_TTL,
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Global configuration for the `Gazzetta` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazzettaConfig {
    /// Strategy for fanning a query out to adapters.
    pub fan_out: FanOutStrategy,
    /// Optional bound on each individual adapter call.
    ///
    /// Adapters usually enforce their own HTTP timeouts; this is an additional
    /// guard for adapters that do not.
    pub adapter_timeout: Option<Duration>,
    /// Result cache settings.
    pub cache: CacheConfig,
}

impl Default for GazzettaConfig {
    fn default() -> Self {
        Self {
            fan_out: FanOutStrategy::default(),
            adapter_timeout: None,
            cache: CacheConfig::default(),
        }
    }
}
