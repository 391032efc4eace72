//! Gazzetta aggregates company news across multiple providers.
//!
//! Overview
//! - Fans a query out to every registered `NewsAdapter` and merges the raw
//!   records in registration order.
//! - Validates each record into an `Article`, filling defaults and repairing
//!   or substituting image URLs.
//! - Drops near-duplicate stories by normalized-title similarity; the first
//!   copy seen wins.
//! - Ranks articles published today ahead of older ones, newest first, and
//!   truncates to the requested count.
//! - Caches the ranked result per `(query, limit)` for five minutes.
//!
//! Key behaviors and trade-offs
//! - Fail-soft: `company_news` never returns an error. A failing adapter is
//!   logged and skipped; if every adapter fails the result is empty.
//! - Fan-out strategy:
//!   - `Concurrent`: one task per adapter; latency of the slowest adapter.
//!     Results are still merged in registration order.
//!   - `Sequential`: adapters run one after another; lower burst load.
//! - Cache: concurrent misses on the same key share one computation. Empty
//!   results are cached too, so a provider outage is not retried until the
//!   entry expires or the caller forces a refresh.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use gazzetta::{Gazzetta, NewsRequest};
//!
//! let news = Gazzetta::builder()
//!     .with_adapter(Arc::new(gazzetta_newsapi::NewsApiAdapter::from_env()?))
//!     .with_adapter(Arc::new(gazzetta_yahoo::YahooAdapter::new_default()))
//!     .build()?;
//!
//! let fresh = news
//!     .company_news(NewsRequest::new("AAPL").limit(3).force_refresh(true))
//!     .await;
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod aggregator;
mod service;
mod util;

pub use aggregator::Aggregator;
pub use service::{Gazzetta, GazzettaBuilder, NewsStore};
pub use util::{collapse_errors, join_in_order};

// Re-export core types for convenience
pub use gazzetta_core::{
    AdapterFailure, AdapterKey, AggregateReport, Article, CacheConfig, CacheStore, DEFAULT_LIMIT,
    FanOutStrategy, GazzettaConfig, GazzettaError, NewsAdapter, NewsKey, NewsRequest, RawArticle,
};
