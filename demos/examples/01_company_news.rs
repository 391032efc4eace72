use gazzetta::{Gazzetta, NewsRequest};
use gazzetta_demos::common::{get_adapters, print_articles};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Gazzetta::builder();
    for adapter in get_adapters() {
        builder = builder.with_adapter(adapter);
    }
    let news = builder.build()?;

    for symbol in ["AAPL", "MSFT", "TSLA"] {
        let articles = news.company_news(NewsRequest::new(symbol).limit(3)).await;
        print_articles(symbol, &articles);
    }

    // Articles serialize with camelCase keys, ready for a JSON API
    let top = news.company_news(NewsRequest::new("AAPL").limit(1)).await;
    println!("{}", serde_json::to_string_pretty(&top)?);

    Ok(())
}
