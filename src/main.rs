//! Movie catalog server binary

use clap::Parser;
use marquee::MarqueeBuilder;
use tracing_subscriber::EnvFilter;

/// Serve the in-memory movie catalog over HTTP
#[derive(Debug, Parser)]
#[command(name = "marquee-server")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = MarqueeBuilder::new().build();

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("movie catalog listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
