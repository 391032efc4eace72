//! Article shapes before and after validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loosely-typed record emitted by one adapter.
///
/// Field names and casing are provider-specific (`urlToImage`, `time_published`,
/// `providerPublishTime`, ...). Nothing downstream of an adapter relies on a
/// particular spelling until the validator resolves it into an [`Article`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawArticle(Map<String, Value>);

impl RawArticle {
    /// An empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, handy for fixtures and adapters.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Exact-key lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Accepts a JSON value if it is an object; anything else yields `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Borrow the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawArticle {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A validated news article.
///
/// Every field carries a value once an article leaves the validator; text
/// fields fall back to deterministic defaults and `published_at` to the
/// processing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline; `"Untitled Article"` when the provider sent none.
    pub title: String,
    /// Summary text; empty when absent.
    pub description: String,
    /// Canonical link; empty when absent.
    pub url: String,
    /// Publisher name; `"Unknown Source"` when absent.
    pub source: String,
    /// Publication instant.
    pub published_at: DateTime<Utc>,
    /// Secure image URL or a logo substituted from the source table.
    pub image_url: Option<String>,
}
