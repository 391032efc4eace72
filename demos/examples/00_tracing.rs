use gazzetta::{Gazzetta, NewsRequest};
use gazzetta_demos::common::get_adapters;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,gazzetta=trace,gazzetta_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let news = get_adapters()
        .into_iter()
        .fold(Gazzetta::builder(), |b, a| b.with_adapter(a))
        .build()?;

    // miss, then hit, then a forced refresh
    let _ = news.company_news(NewsRequest::new("AAPL")).await;
    let _ = news.company_news(NewsRequest::new("AAPL")).await;
    let _ = news
        .company_news(NewsRequest::new("AAPL").force_refresh(true))
        .await;

    tracing::info!("done");
    Ok(())
}
