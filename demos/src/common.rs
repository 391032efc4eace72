use std::sync::Arc;

use gazzetta::NewsAdapter;
use gazzetta_mock::{MockAdapter, MockFlavor};

/// Environment switch that replaces every live adapter with fixtures.
pub const USE_MOCK_ENV: &str = "GAZZETTA_DEMOS_USE_MOCK";

/// Return the adapters used by the demos, in registration order.
///
/// With `GAZZETTA_DEMOS_USE_MOCK` set, three fixture adapters stand in for
/// NewsAPI, Yahoo and Alpha Vantage. Otherwise Yahoo is always used and the
/// keyed providers are added when their API key is present.
#[must_use]
pub fn get_adapters() -> Vec<Arc<dyn NewsAdapter>> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Adapters for CI) ---");
        return vec![
            Arc::new(MockAdapter::with_flavor("mock-newsapi", MockFlavor::NewsApi)),
            Arc::new(MockAdapter::with_flavor("mock-yahoo", MockFlavor::Yahoo)),
            Arc::new(MockAdapter::with_flavor(
                "mock-alphavantage",
                MockFlavor::AlphaVantage,
            )),
        ];
    }

    let mut adapters: Vec<Arc<dyn NewsAdapter>> = Vec::new();
    if let Ok(newsapi) = gazzetta_newsapi::NewsApiAdapter::from_env() {
        adapters.push(Arc::new(newsapi));
    }
    adapters.push(Arc::new(gazzetta_yahoo::YahooAdapter::new_default()));
    if let Ok(av) = gazzetta_alphavantage::AlphaVantageAdapter::from_env() {
        adapters.push(Arc::new(av));
    }
    adapters
}

/// Print one line per article.
pub fn print_articles(query: &str, articles: &[gazzetta::Article]) {
    println!("{query}: {} article(s)", articles.len());
    for a in articles {
        println!(
            "  [{}] {} ({})",
            a.published_at.format("%Y-%m-%d %H:%M"),
            a.title,
            a.source
        );
    }
}
