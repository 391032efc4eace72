use std::hash::Hash;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;
use gazzetta_core::CacheStore;
use moka::future::Cache;

/// In-memory TTL store backed by `moka`.
///
/// Entries expire `ttl` after they were computed and are replaced wholesale on
/// recompute. When several callers miss the same key at once only one of them
/// runs its computation; the others wait for and share its result.
pub struct MokaStore<K, V> {
    inner: Cache<K, V>,
    ttl: Duration,
}

impl<K, V> MokaStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a store holding at most `capacity` entries, each living for `ttl`.
    #[must_use]
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity.max(1))
            .time_to_live(ttl)
            .build();
        Self { inner, ttl }
    }

    /// Entry lifetime this store was built with.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a live entry for `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for MokaStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get_or_compute(&self, key: K, compute: BoxFuture<'static, V>) -> V {
        self.inner.get_with(key, compute).await
    }

    async fn delete(&self, key: &K) {
        #[cfg(feature = "tracing")]
        tracing::debug!(entries = self.inner.entry_count(), "invalidating cache entry");
        self.inner.invalidate(key).await;
    }
}
