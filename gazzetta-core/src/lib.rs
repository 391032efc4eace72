//! gazzetta-core
//!
//! Contracts and pure algorithms shared across the gazzetta workspace.
//!
//! - `adapter`: the `NewsAdapter` trait implemented by every provider crate.
//! - `cache`: the `CacheStore` trait the service reads through.
//! - `pipeline`: validation, near-duplicate removal and ranking of articles.
//!
//! Nothing here performs I/O; the pipeline functions are deterministic given
//! their inputs and the `now` instant passed to them.
#![warn(missing_docs)]

/// The provider adapter contract.
pub mod adapter;
/// The cache collaborator contract.
pub mod cache;
/// Validate, dedupe and rank stages.
pub mod pipeline;

pub use adapter::NewsAdapter;
pub use cache::CacheStore;
pub use pipeline::dedup::{SIMILARITY_THRESHOLD, dedupe, normalize_title, titles_similar};
pub use pipeline::logos::{GENERIC_LOGO, logo_for};
pub use pipeline::rank::{rank, rank_at, start_of_local_day};
pub use pipeline::validate::{validate, validate_at};
pub use pipeline::{process, process_at};

pub use gazzetta_types::{
    AdapterFailure, AdapterKey, AggregateReport, Article, CacheConfig, DEFAULT_LIMIT,
    FanOutStrategy, GazzettaConfig, GazzettaError, NewsKey, NewsRequest, RawArticle,
};
