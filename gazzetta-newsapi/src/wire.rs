use gazzetta_core::{GazzettaError, RawArticle};
use serde::Deserialize;
use serde_json::Value;

use crate::NAME;

/// Response envelope of `/v2/everything`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    status: String,
    #[serde(default)]
    articles: Vec<Value>,
    code: Option<String>,
    message: Option<String>,
}

impl Envelope {
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self, GazzettaError> {
        serde_json::from_slice(body).map_err(|e| GazzettaError::parse(NAME, e.to_string()))
    }

    /// Article objects, or the error NewsAPI reported in-band.
    pub(crate) fn into_articles(self, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        if self.status != "ok" {
            return Err(GazzettaError::provider(
                NAME,
                format!(
                    "{}: {}",
                    self.code.as_deref().unwrap_or("unknown"),
                    self.message.as_deref().unwrap_or("no message")
                ),
            ));
        }
        Ok(self
            .articles
            .into_iter()
            .filter_map(RawArticle::from_value)
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_object_entries_are_skipped() {
        let env = Envelope::from_slice(
            br#"{"status":"ok","totalResults":3,"articles":[{"title":"a"},42,{"title":"b"}]}"#,
        )
        .unwrap();
        let got = env.into_articles(10).unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].get("title").unwrap(), "b");
    }

    #[test]
    fn error_envelope_carries_code_and_message() {
        let env = Envelope::from_slice(
            br#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#,
        )
        .unwrap();
        let err = env.into_articles(5).unwrap_err();
        assert_eq!(
            err,
            GazzettaError::provider(NAME, "apiKeyInvalid: Your API key is invalid.")
        );
    }
}
