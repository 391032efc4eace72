//! The pure article pipeline: validate, dedupe, rank.
//!
//! Each stage is a plain function over owned data so the service can run it on
//! a cache miss without any shared state.

/// Near-duplicate detection.
pub mod dedup;
/// Source name to logo lookup.
pub mod logos;
/// Today-first recency ranking.
pub mod rank;
/// Field defaulting and image repair.
pub mod validate;

use chrono::{DateTime, Utc};
use gazzetta_types::{Article, RawArticle};

/// Run the full pipeline against the current wall clock.
#[must_use]
pub fn process(raw: &[RawArticle], limit: usize) -> Vec<Article> {
    process_at(raw, limit, Utc::now())
}

/// Validate every record, drop near-duplicates, then rank and truncate to `limit`.
///
/// `now` is the processing time used for missing timestamps and for deciding
/// which local day counts as today.
#[must_use]
pub fn process_at(raw: &[RawArticle], limit: usize, now: DateTime<Utc>) -> Vec<Article> {
    let validated = raw.iter().map(|r| validate::validate_at(r, now)).collect();
    rank::rank_at(dedup::dedupe(validated), limit, rank::start_of_local_day(now))
}
