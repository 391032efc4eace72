//! Recency ranking with a boost for articles published today.

use std::cmp::Reverse;

use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
use gazzetta_types::Article;

/// Rank against the start of the current local day.
///
/// See [`rank_at`].
#[must_use]
pub fn rank(articles: Vec<Article>, limit: usize) -> Vec<Article> {
    rank_at(articles, limit, start_of_local_day(Utc::now()))
}

/// Order `articles` and keep at most `limit` of them.
///
/// Articles published at or after `today_start` come first regardless of
/// timestamps in the older bucket. Inside each bucket the newest article comes
/// first. The sort is stable, so ties keep their input order.
#[must_use]
pub fn rank_at(mut articles: Vec<Article>, limit: usize, today_start: DateTime<Utc>) -> Vec<Article> {
    articles.sort_by_key(|a| (a.published_at < today_start, Reverse(a.published_at)));
    articles.truncate(limit);
    articles
}

/// Midnight of the local calendar day containing `now`, as UTC.
///
/// When local midnight does not exist (a DST jump at 00:00) the earliest
/// valid instant of that day is used.
#[must_use]
pub fn start_of_local_day(now: DateTime<Utc>) -> DateTime<Utc> {
    let day = now.with_timezone(&Local).date_naive();
    let midnight = day.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
        })
        .map_or_else(|| midnight.and_utc(), |dt| dt.with_timezone(&Utc))
}
