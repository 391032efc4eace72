#![doc = include_str!("../README.md")]
//! gazzetta-cache
//!
//! Re-exports for the cache backends.

mod moka_store;
mod pass_through;

use std::hash::Hash;
use std::sync::Arc;

use gazzetta_core::{CacheConfig, CacheStore};

pub use crate::moka_store::MokaStore;
pub use crate::pass_through::PassThroughStore;

/// Build the store described by `cfg`.
///
/// A zero TTL yields a [`PassThroughStore`]; anything else a [`MokaStore`]
/// bounded by `cfg.capacity()`.
#[must_use]
pub fn store_for<K, V>(cfg: &CacheConfig) -> Arc<dyn CacheStore<K, V>>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    match cfg.effective_ttl() {
        Some(ttl) => Arc::new(MokaStore::new(cfg.capacity(), ttl)),
        None => Arc::new(PassThroughStore),
    }
}
