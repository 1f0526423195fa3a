use anyhow::{Context, Result};
use scholar_fetch::config::Config;
use scholar_fetch::pipeline;
use scholar_fetch::sources::GoogleScholarSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "scholar_fetch=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();
    let source =
        GoogleScholarSource::new().context("Failed to initialize the Google Scholar client")?;

    // Setup and author-resolution failures propagate to a non-zero exit;
    // per-publication failures are contained inside the pipeline.
    pipeline::run(&source, &config).await?;
    Ok(())
}
