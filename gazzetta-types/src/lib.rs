//! Gazzetta-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod adapter;
mod article;
mod config;
mod error;
mod reports;
mod request;

pub use adapter::AdapterKey;
pub use article::{Article, RawArticle};
pub use config::{CacheConfig, FanOutStrategy, GazzettaConfig};
pub use error::GazzettaError;
pub use reports::{AdapterFailure, AggregateReport};
pub use request::{DEFAULT_LIMIT, NewsKey, NewsRequest};
