use gazzetta_core::{GazzettaError, NewsAdapter, validate};
use gazzetta_yahoo::YahooAdapter;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn reads_news_block() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/finance/search")
                .query_param("q", "MSFT")
                .query_param("newsCount", "3")
                .query_param("quotesCount", "0");
            then.status(200).json_body(json!({
                "count": 1,
                "quotes": [],
                "news": [{
                    "uuid": "9f1c",
                    "title": "Microsoft raises dividend",
                    "publisher": "MarketWatch",
                    "link": "https://finance.yahoo.com/m/9f1c",
                    "providerPublishTime": 1_744_200_000,
                    "type": "STORY",
                    "thumbnail": { "resolutions": [
                        { "url": "https://s.yimg.com/msft.jpg", "width": 800, "height": 600, "tag": "original" }
                    ]},
                    "relatedTickers": ["MSFT"]
                }]
            }));
        })
        .await;

    let adapter = YahooAdapter::new_default().with_base_url(server.base_url());
    let got = adapter.fetch("MSFT", 3).await.unwrap();
    mock.assert_async().await;

    assert_eq!(got.len(), 1);
    let article = validate(&got[0]);
    assert_eq!(article.title, "Microsoft raises dividend");
    assert_eq!(article.source, "MarketWatch");
    assert_eq!(article.url, "https://finance.yahoo.com/m/9f1c");
    assert_eq!(article.published_at.timestamp(), 1_744_200_000);
    assert_eq!(article.image_url.as_deref(), Some("https://s.yimg.com/msft.jpg"));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v1/finance/search");
            then.status(503);
        })
        .await;

    let adapter = YahooAdapter::new_default().with_base_url(server.base_url());
    let err = adapter.fetch("MSFT", 3).await.unwrap_err();
    assert_eq!(err, GazzettaError::status("gazzetta-yahoo", 503));
}

#[tokio::test]
async fn truncated_json_maps_to_parse() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v1/finance/search");
            then.status(200).body(r#"{"news":[{"title":"#);
        })
        .await;

    let adapter = YahooAdapter::new_default().with_base_url(server.base_url());
    let err = adapter.fetch("MSFT", 3).await.unwrap_err();
    assert!(matches!(err, GazzettaError::Parse { .. }));
    assert_eq!(err.adapter(), Some("gazzetta-yahoo"));
}
