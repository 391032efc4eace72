use async_trait::async_trait;
use futures::future::BoxFuture;

/// Look-aside cache contract used by the service.
///
/// A store owns entry lifetime: it decides when a value is stale and whether
/// concurrent misses on the same key share one computation. Storage medium
/// and eviction policy are the implementation's concern.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Send + 'static,
{
    /// Return the live value for `key`, or run `compute`, store and return its result.
    async fn get_or_compute(&self, key: K, compute: BoxFuture<'static, V>) -> V;

    /// Drop any entry for `key`. Deleting a missing key is a no-op.
    async fn delete(&self, key: &K);
}
