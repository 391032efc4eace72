use async_trait::async_trait;
use futures::future::BoxFuture;
use gazzetta_core::CacheStore;

/// A store that never keeps anything: every read computes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughStore;

#[async_trait]
impl<K, V> CacheStore<K, V> for PassThroughStore
where
    K: Send + Sync + 'static,
    V: Send + 'static,
{
    async fn get_or_compute(&self, _key: K, compute: BoxFuture<'static, V>) -> V {
        compute.await
    }

    async fn delete(&self, _key: &K) {}
}
