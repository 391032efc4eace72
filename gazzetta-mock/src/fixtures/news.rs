use chrono::{DateTime, Duration, Utc};
use gazzetta_core::RawArticle;
use serde_json::json;

use crate::MockFlavor;

struct Story {
    title: &'static str,
    summary: &'static str,
    source: &'static str,
    url: &'static str,
    image: Option<&'static str>,
    minutes_ago: i64,
    feeds: &'static [MockFlavor],
}

const ALL: &[MockFlavor] = &[
    MockFlavor::NewsApi,
    MockFlavor::Yahoo,
    MockFlavor::AlphaVantage,
];
const NEWSAPI: &[MockFlavor] = &[MockFlavor::NewsApi];
const YAHOO: &[MockFlavor] = &[MockFlavor::Yahoo];
const ALPHA: &[MockFlavor] = &[MockFlavor::AlphaVantage];

const AAPL: &[Story] = &[
    Story {
        title: "Apple Beats Earnings Expectations on Services Growth",
        summary: "Services revenue hit a record as iPhone sales held steady.",
        source: "Reuters",
        url: "https://www.reuters.com/technology/apple-beats-earnings",
        image: Some("http://static.reuters.com/apple-earnings.jpg"),
        minutes_ago: 45,
        feeds: NEWSAPI,
    },
    Story {
        title: "BREAKING: Apple beats earnings expectations on services growth!",
        summary: "Apple topped Wall Street estimates.",
        source: "Yahoo Finance",
        url: "https://finance.yahoo.com/news/apple-beats-earnings",
        image: None,
        minutes_ago: 30,
        feeds: YAHOO,
    },
    Story {
        title: "Apple unveils on-device AI features for iPhone",
        summary: "New models run locally on the latest chips.",
        source: "Bloomberg",
        url: "https://www.bloomberg.com/news/apple-ai-iphone",
        image: Some("not a url"),
        minutes_ago: 160,
        feeds: ALL,
    },
    Story {
        title: "Apple shares slip as China sales cool",
        summary: "Shipments in China fell for a second quarter.",
        source: "CNBC",
        url: "https://www.cnbc.com/apple-china-sales",
        image: Some("https://image.cnbc.com/apple-china.jpg"),
        minutes_ago: 60 * 30,
        feeds: ALPHA,
    },
    Story {
        title: "Is Apple stock a buy ahead of WWDC?",
        summary: "Analysts weigh the setup into the developer conference.",
        source: "The Motley Fool",
        url: "https://www.fool.com/investing/apple-wwdc",
        image: None,
        minutes_ago: 60 * 52,
        feeds: ALL,
    },
];

const MSFT: &[Story] = &[
    Story {
        title: "Microsoft cloud revenue jumps as Azure demand surges",
        summary: "Azure growth accelerated for the third straight quarter.",
        source: "Wall Street Journal",
        url: "https://www.wsj.com/tech/microsoft-azure",
        image: Some("https://images.wsj.net/msft-azure.jpg"),
        minutes_ago: 90,
        feeds: ALL,
    },
    Story {
        title: "Exclusive: Microsoft in talks to expand data center footprint",
        summary: "People familiar with the matter describe new sites.",
        source: "Reuters",
        url: "https://www.reuters.com/technology/microsoft-data-centers",
        image: None,
        minutes_ago: 60 * 26,
        feeds: NEWSAPI,
    },
    Story {
        title: "Microsoft raises dividend by 10%",
        summary: "The board approved a quarterly dividend increase.",
        source: "MarketWatch",
        url: "https://www.marketwatch.com/story/microsoft-dividend",
        image: Some("http://mw3.wsj.net/msft-dividend.png"),
        minutes_ago: 60 * 75,
        feeds: YAHOO,
    },
];

const TSLA: &[Story] = &[
    Story {
        title: "Tesla deliveries top estimates in record quarter",
        summary: "Deliveries rose on strong demand in Europe.",
        source: "Bloomberg",
        url: "https://www.bloomberg.com/news/tesla-deliveries",
        image: Some("https://assets.bwbx.io/tesla.jpg"),
        minutes_ago: 20,
        feeds: ALL,
    },
    Story {
        title: "Tesla recalls vehicles over software issue",
        summary: "The fix will be delivered over the air.",
        source: "Forbes",
        url: "https://www.forbes.com/tesla-recall",
        image: None,
        minutes_ago: 60 * 49,
        feeds: ALPHA,
    },
];

fn stories(symbol: &str) -> &'static [Story] {
    match symbol {
        "AAPL" => AAPL,
        "MSFT" => MSFT,
        "TSLA" => TSLA,
        _ => &[],
    }
}

/// Fixture records for `symbol` in the wire shape of `flavor`, timestamps relative to `now`.
pub fn by_symbol(symbol: &str, flavor: MockFlavor, now: DateTime<Utc>) -> Vec<RawArticle> {
    stories(symbol)
        .iter()
        .filter(|s| s.feeds.contains(&flavor))
        .map(|s| render(s, flavor, now - Duration::minutes(s.minutes_ago)))
        .collect()
}

fn render(s: &Story, flavor: MockFlavor, at: DateTime<Utc>) -> RawArticle {
    match flavor {
        MockFlavor::NewsApi => RawArticle::new()
            .with("source", json!({ "id": null, "name": s.source }))
            .with("author", serde_json::Value::Null)
            .with("title", s.title)
            .with("description", s.summary)
            .with("url", s.url)
            .with("urlToImage", json!(s.image))
            .with("publishedAt", at.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
        MockFlavor::Yahoo => RawArticle::new()
            .with("title", s.title)
            .with("publisher", s.source)
            .with("link", s.url)
            .with("providerPublishTime", at.timestamp())
            .with("type", "STORY")
            .with("image", json!(s.image)),
        MockFlavor::AlphaVantage => RawArticle::new()
            .with("title", s.title)
            .with("url", s.url)
            .with("time_published", at.format("%Y%m%dT%H%M%S").to_string())
            .with("summary", s.summary)
            .with("banner_image", json!(s.image))
            .with("source", s.source)
            .with("overall_sentiment_label", "Neutral"),
    }
}
