//! Dashboard router server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser navigation
//!     ───────▶ http server ──▶ theme gate ──▶ router ──▶ layout shell ──▶ view
//!                   │              │             │
//!                   │        spinner while   root redirect
//!                   │        theme loads     on login flag
//!                   ▼
//!      307 redirect | page JSON | 503 spinner
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use dashboard_router::config::{load_config, DashboardConfig};
use dashboard_router::lifecycle::{build_components, signals, Shutdown};
use dashboard_router::observability::{logging, metrics};
use dashboard_router::HttpServer;

#[derive(Parser)]
#[command(name = "dashboard-router")]
#[command(about = "View router for the observability dashboard", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability.log_level);
    tracing::info!("dashboard-router v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?cli.config,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let components = build_components(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        signal_shutdown.trigger();
    });

    let server = HttpServer::new(config, components);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
