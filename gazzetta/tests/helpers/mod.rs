// Shared fixtures for the gazzetta integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gazzetta::{Gazzetta, GazzettaError, NewsAdapter, RawArticle};

pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";

/// A NewsAPI-looking record with an RFC 3339 timestamp.
pub fn raw(title: &str, at: DateTime<Utc>) -> RawArticle {
    RawArticle::new()
        .with("title", title)
        .with("publishedAt", at.to_rfc3339())
}

/// A record without any timestamp.
pub fn titled(title: &str) -> RawArticle {
    RawArticle::new().with("title", title)
}

/// Build a service over `adapters` with default configuration.
pub fn service(adapters: &[Arc<dyn NewsAdapter>]) -> Gazzetta {
    adapters
        .iter()
        .fold(Gazzetta::builder(), |b, a| b.with_adapter(Arc::clone(a)))
        .build()
        .expect("at least one adapter")
}

pub fn titles(articles: &[gazzetta::Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}

/// Adapter answering every query with the same records.
pub struct Canned {
    pub name: &'static str,
    pub records: Vec<RawArticle>,
}

#[async_trait]
impl NewsAdapter for Canned {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _query: &str, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}
