use std::time::{Duration, Instant};

use gazzetta::{CacheConfig, FanOutStrategy, Gazzetta, NewsRequest};
use gazzetta_demos::common::get_adapters;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    for strategy in [FanOutStrategy::Concurrent, FanOutStrategy::Sequential] {
        let news = get_adapters()
            .into_iter()
            .fold(Gazzetta::builder(), |b, a| b.with_adapter(a))
            .fan_out(strategy)
            .adapter_timeout(Duration::from_secs(8))
            // no cache so both runs hit every adapter
            .cache_config(CacheConfig {
                ttl: Duration::ZERO,
                ..CacheConfig::default()
            })
            .build()?;

        let started = Instant::now();
        let report = news.aggregate("MSFT", 5).await;
        println!(
            "{strategy:?}: {} raw record(s) from {}/{} adapter(s) in {:?}",
            report.articles.len(),
            report.succeeded(),
            report.attempted,
            started.elapsed()
        );
        for failure in &report.errors {
            println!("  {} failed: {}", failure.adapter, failure.error);
        }

        let ranked = news.company_news(NewsRequest::new("MSFT")).await;
        println!("  {} article(s) after dedup and ranking", ranked.len());
    }
    Ok(())
}
