use dashboard_service::{routes, ServiceConfig};
use lineup_fetcher::LineupFetcher;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env();
    info!("Starting dashboard service on {}:{}", config.host, config.port);
    info!("Lineup backend: {}", config.fetcher.backend_url);

    let fetcher = Arc::new(LineupFetcher::new(config.fetcher.clone())?);
    warp::serve(routes(fetcher)).run((config.host, config.port)).await;

    Ok(())
}
