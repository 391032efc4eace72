use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use gazzetta_core::{GENERIC_LOGO, RawArticle, logo_for, process_at};
use serde_json::json;

/// Local noon, so "today" and "yesterday" are unambiguous.
fn noon() -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(2025, 4, 9, 12, 0, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

fn rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[test]
fn near_duplicate_from_second_adapter_is_dropped() {
    let now = noon();
    let raw = vec![
        RawArticle::new()
            .with("title", "Apple Beats Earnings")
            .with("source", "Reuters")
            .with("publishedAt", rfc3339(now - Duration::hours(1))),
        RawArticle::new()
            .with("title", "apple beats earnings!!")
            .with("source", "CNBC")
            .with("publishedAt", rfc3339(now - Duration::days(1))),
    ];
    let out = process_at(&raw, 5, now);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Apple Beats Earnings");
    assert_eq!(out[0].source, "Reuters");
}

#[test]
fn today_first_then_newest_older() {
    let now = noon();
    let mk = |title: &str, at: DateTime<Utc>| {
        RawArticle::new()
            .with("title", title)
            .with("publishedAt", rfc3339(at))
    };
    let raw = vec![
        mk("Old but recent chip story", now - Duration::days(1)),
        mk("Morning rally in tech stocks", now - Duration::hours(3)),
        mk("Quarterly dividend declared", now - Duration::days(3)),
        mk("Lunch time merger rumor", now - Duration::minutes(20)),
        mk("Analyst downgrade last week", now - Duration::days(7)),
    ];
    let out = process_at(&raw, 3, now);
    let titles: Vec<_> = out.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Lunch time merger rumor",
            "Morning rally in tech stocks",
            "Old but recent chip story"
        ]
    );
}

#[test]
fn image_repair_and_logo_fallback() {
    let now = noon();
    let raw = vec![
        RawArticle::new()
            .with("title", "Insecure image")
            .with("imageUrl", "http://foo.com/x.png"),
        RawArticle::new()
            .with("title", "Broken image from a known outlet")
            .with("imageUrl", "not a url")
            .with("source", json!({ "name": "MarketWatch" })),
        RawArticle::new()
            .with("title", "Broken image from an unknown outlet")
            .with("imageUrl", "not a url")
            .with("source", "Some Blog"),
    ];
    let out = process_at(&raw, 5, now);
    let image = |title: &str| {
        out.iter()
            .find(|a| a.title == title)
            .and_then(|a| a.image_url.clone())
    };
    assert_eq!(image("Insecure image").as_deref(), Some("https://foo.com/x.png"));
    assert_eq!(
        image("Broken image from a known outlet").as_deref(),
        Some(logo_for("MarketWatch"))
    );
    assert_eq!(
        image("Broken image from an unknown outlet").as_deref(),
        Some(GENERIC_LOGO)
    );
}

#[test]
fn untitled_records_collapse_into_one() {
    let out = process_at(&[RawArticle::new(), RawArticle::new()], 5, noon());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Untitled Article");
}
