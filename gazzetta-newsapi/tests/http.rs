use gazzetta_core::{GazzettaError, NewsAdapter};
use gazzetta_newsapi::NewsApiAdapter;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn maps_articles_and_sends_key_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", "AAPL")
                .query_param("pageSize", "2")
                .query_param("sortBy", "publishedAt")
                .header("X-Api-Key", "secret");
            then.status(200).json_body(json!({
                "status": "ok",
                "totalResults": 3,
                "articles": [
                    {
                        "source": { "id": "reuters", "name": "Reuters" },
                        "title": "Apple beats estimates",
                        "url": "https://reuters.com/a",
                        "urlToImage": "http://img.reuters.com/a.jpg",
                        "publishedAt": "2025-04-09T12:00:00Z"
                    },
                    { "source": { "name": "CNBC" }, "title": "Apple slips" },
                    { "source": { "name": "Forbes" }, "title": "Third" }
                ]
            }));
        })
        .await;

    let adapter = NewsApiAdapter::new("secret").with_base_url(server.base_url());
    let got = adapter.fetch("AAPL", 2).await.unwrap();
    mock.assert_async().await;

    assert_eq!(got.len(), 2);
    assert_eq!(got[0].get("title").unwrap(), "Apple beats estimates");
    assert_eq!(got[0].get("source").unwrap()["name"], "Reuters");
    assert_eq!(got[0].get("urlToImage").unwrap(), "http://img.reuters.com/a.jpg");
}

#[tokio::test]
async fn http_error_maps_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v2/everything");
            then.status(429).json_body(json!({
                "status": "error",
                "code": "rateLimited",
                "message": "Too many requests"
            }));
        })
        .await;

    let adapter = NewsApiAdapter::new("k").with_base_url(server.base_url());
    let err = adapter.fetch("AAPL", 5).await.unwrap_err();
    assert_eq!(err, GazzettaError::status("gazzetta-newsapi", 429));
    assert!(err.is_transient());
}

#[tokio::test]
async fn malformed_body_maps_to_parse() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v2/everything");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let adapter = NewsApiAdapter::new("k").with_base_url(server.base_url());
    let err = adapter.fetch("AAPL", 5).await.unwrap_err();
    assert!(matches!(err, GazzettaError::Parse { .. }));
}

#[tokio::test]
async fn unreachable_host_maps_to_provider() {
    // port 9 (discard) is closed on test hosts
    let adapter = NewsApiAdapter::new("k").with_base_url("http://127.0.0.1:9");
    let err = adapter.fetch("AAPL", 5).await.unwrap_err();
    assert_eq!(err.adapter(), Some("gazzetta-newsapi"));
}
