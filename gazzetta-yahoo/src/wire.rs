use gazzetta_core::{GazzettaError, RawArticle};
use serde::Deserialize;

use crate::NAME;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    news: Vec<Story>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Story {
    title: Option<String>,
    publisher: Option<String>,
    link: Option<String>,
    provider_publish_time: Option<i64>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    resolutions: Vec<Resolution>,
}

#[derive(Debug, Deserialize)]
struct Resolution {
    url: String,
    tag: Option<String>,
}

impl Thumbnail {
    /// The `original` rendition if present, else the first one.
    fn best(&self) -> Option<&str> {
        self.resolutions
            .iter()
            .find(|r| r.tag.as_deref() == Some("original"))
            .or_else(|| self.resolutions.first())
            .map(|r| r.url.as_str())
    }
}

impl SearchResponse {
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self, GazzettaError> {
        serde_json::from_slice(body).map_err(|e| GazzettaError::parse(NAME, e.to_string()))
    }

    pub(crate) fn into_articles(self, limit: usize) -> Vec<RawArticle> {
        self.news
            .into_iter()
            .take(limit)
            .map(Story::into_raw)
            .collect()
    }
}

impl Story {
    fn into_raw(self) -> RawArticle {
        let mut raw = RawArticle::new();
        if let Some(title) = self.title {
            raw.insert("title", title);
        }
        if let Some(publisher) = self.publisher {
            raw.insert("publisher", publisher);
        }
        if let Some(link) = self.link {
            raw.insert("link", link);
        }
        if let Some(ts) = self.provider_publish_time {
            raw.insert("providerPublishTime", ts);
        }
        if let Some(image) = self.thumbnail.as_ref().and_then(Thumbnail::best) {
            raw.insert("image", image);
        }
        raw
    }
}
