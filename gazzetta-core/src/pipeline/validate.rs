//! Turn loosely-typed provider records into fully-populated [`Article`]s.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use gazzetta_types::{Article, RawArticle};
use serde_json::Value;
use url::Url;

use super::logos::logo_for;

pub(crate) const UNTITLED: &str = "Untitled Article";
pub(crate) const UNKNOWN_SOURCE: &str = "Unknown Source";

// Aliases are stored in folded form (see `fold_key`), highest priority first.
const TITLE_KEYS: &[&str] = &["title", "headline"];
const DESCRIPTION_KEYS: &[&str] = &["description", "summary"];
const URL_KEYS: &[&str] = &["url", "link"];
const SOURCE_KEYS: &[&str] = &["source", "publisher", "sourcename"];
const PUBLISHED_KEYS: &[&str] = &[
    "publishedat",
    "providerpublishtime",
    "timepublished",
    "pubdate",
    "datetime",
];
const IMAGE_KEYS: &[&str] = &["imageurl", "urltoimage", "bannerimage", "image"];

/// Epoch values above this are taken to be milliseconds.
const MILLIS_CUTOFF: i64 = 1_000_000_000_000;

/// Validate one record against the current wall clock.
///
/// See [`validate_at`].
#[must_use]
pub fn validate(raw: &RawArticle) -> Article {
    validate_at(raw, Utc::now())
}

/// Validate one record, using `now` as the processing time.
///
/// Never fails. Missing or blank fields take their defaults: `"Untitled
/// Article"`, empty description and url, `"Unknown Source"`, and `now` for
/// the publication time. A timestamp that is present but unreadable becomes
/// the Unix epoch so it ranks as oldest.
///
/// The image URL is dropped unless it is an absolute URL with a host; an
/// `http` URL is rewritten to `https`. When nothing usable remains, a logo is
/// picked from the source table.
#[must_use]
pub fn validate_at(raw: &RawArticle, now: DateTime<Utc>) -> Article {
    let title = text_field(raw, TITLE_KEYS).unwrap_or_else(|| UNTITLED.to_string());
    let description = text_field(raw, DESCRIPTION_KEYS).unwrap_or_default();
    let url = text_field(raw, URL_KEYS).unwrap_or_default();
    let source = source_field(raw).unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
    let published_at = match lookup(raw, PUBLISHED_KEYS) {
        Some(v) => parse_timestamp(v).unwrap_or(DateTime::UNIX_EPOCH),
        None => now,
    };
    let image_url = text_field(raw, IMAGE_KEYS)
        .and_then(|s| secure_image_url(&s))
        .unwrap_or_else(|| logo_for(&source).to_string());

    Article {
        title,
        description,
        url,
        source,
        published_at,
        image_url: Some(image_url),
    }
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// First non-blank value among `aliases`, honoring alias priority.
fn lookup<'a>(raw: &'a RawArticle, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|alias| {
        raw.iter()
            .find(|(k, v)| fold_key(k) == *alias && !is_blank(v))
            .map(|(_, v)| v)
    })
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_field(raw: &RawArticle, aliases: &[&str]) -> Option<String> {
    lookup(raw, aliases).and_then(as_text)
}

// NewsAPI nests the publisher as `{ "id": .., "name": .. }`.
fn source_field(raw: &RawArticle) -> Option<String> {
    match lookup(raw, SOURCE_KEYS)? {
        Value::Object(obj) => obj
            .get("name")
            .and_then(as_text)
            .filter(|s| !s.is_empty()),
        other => as_text(other),
    }
}

fn parse_timestamp(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(from_epoch),
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn from_epoch(n: i64) -> Option<DateTime<Utc>> {
    if n.unsigned_abs() > MILLIS_CUTOFF.unsigned_abs() {
        DateTime::from_timestamp_millis(n)
    } else {
        DateTime::from_timestamp(n, 0)
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<i64>().ok().and_then(from_epoch);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Alpha Vantage style, always UTC.
    for fmt in ["%Y%m%dT%H%M%S", "%Y%m%dT%H%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    None
}

/// Shape checks the `url` parser is lenient about: embedded whitespace or
/// backslashes, and a scheme not followed by `//`.
fn is_well_formed(raw: &str) -> bool {
    !raw
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '\\')
        && raw
            .split_once("://")
            .is_some_and(|(scheme, _)| !scheme.is_empty())
}

fn secure_image_url(raw: &str) -> Option<String> {
    let parsed = match Url::parse(raw) {
        Ok(url) if is_well_formed(raw) && url.has_host() => url,
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!(image_url = raw, "discarding malformed image url");
            return None;
        }
    };
    if parsed.scheme() != "http" {
        return Some(raw.to_string());
    }
    // the scheme is ASCII and the raw string starts with it
    raw.get(4..).map(|rest| format!("https{rest}"))
}
