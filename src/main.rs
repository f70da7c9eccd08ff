// Main entry point - configuration, logging and server setup
use std::net::SocketAddr;

use signal_chart::build_app;
use signal_chart::infrastructure::config::load_app_config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;
    let addr: SocketAddr = config.server.bind.parse()?;

    let router = build_app(&config);

    tracing::info!(
        "Starting signal-chart on {} (poll every {} ms)",
        addr,
        config.chart.poll_interval_ms
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
