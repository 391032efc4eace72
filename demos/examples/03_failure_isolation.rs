use std::sync::Arc;

use gazzetta::{Gazzetta, NewsAdapter, NewsRequest};
use gazzetta_demos::common::{get_adapters, print_articles};
use gazzetta_mock::{DynamicMockAdapter, MockBehavior};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A scripted adapter that always fails, registered ahead of the real ones
    let (flaky, controller) = DynamicMockAdapter::new_with_controller("flaky");
    controller
        .set_fallback(MockBehavior::Fail(gazzetta::GazzettaError::status(
            "flaky", 503,
        )))
        .await;

    let adapters: Vec<Arc<dyn NewsAdapter>> =
        std::iter::once(flaky).chain(get_adapters()).collect();
    let news = adapters
        .into_iter()
        .fold(Gazzetta::builder(), |b, a| b.with_adapter(a))
        .build()?;

    let report = news.aggregate("TSLA", 5).await;
    for failure in &report.errors {
        println!("adapter #{} ({}) failed: {}", failure.index, failure.adapter, failure.error);
    }

    let articles = news.company_news(NewsRequest::new("TSLA")).await;
    print_articles("TSLA", &articles);
    println!("flaky adapter was called {} time(s)", controller.calls().await);
    Ok(())
}
