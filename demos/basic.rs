//! Basic movie catalog server example
//!
//! Run with: cargo run --example basic

use marquee::MarqueeBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Seeded catalog: two movies are present before the first request
    let app = MarqueeBuilder::new().build();

    let addr = "127.0.0.1:8000";
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("movie catalog listening on http://{}", addr);
    tracing::info!("Try: curl http://{}/movies", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
