use gazzetta_core::{GazzettaError, RawArticle};
use serde::Deserialize;
use serde_json::Value;

use crate::NAME;

/// `NEWS_SENTIMENT` body. Exactly one of `feed` or a notice is expected.
#[derive(Debug, Deserialize)]
pub(crate) struct NewsSentiment {
    feed: Option<Vec<Value>>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

impl NewsSentiment {
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self, GazzettaError> {
        serde_json::from_slice(body).map_err(|e| GazzettaError::parse(NAME, e.to_string()))
    }

    pub(crate) fn into_articles(self, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        match self.feed {
            Some(feed) => Ok(feed
                .into_iter()
                .filter_map(RawArticle::from_value)
                .take(limit)
                .collect()),
            None => {
                let msg = self
                    .error_message
                    .or(self.information)
                    .or(self.note)
                    .unwrap_or_else(|| "response carried no feed".to_string());
                Err(GazzettaError::provider(NAME, msg))
            }
        }
    }
}
