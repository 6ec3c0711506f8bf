//! Weather API Server
//!
//! Serves aggregated DMI, OpenWeatherMap and WeatherAPI.com data for the
//! configured locations.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use providers::ProvidersConfig;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use wx_common::LocationsConfig;

use wx_api::state::AppState;

/// Weather API Server
#[derive(Parser, Debug)]
#[command(name = "wx-api")]
#[command(about = "Aggregated weather, ocean and lightning data for configured locations")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "WX_LISTEN_ADDR")]
    listen: String,

    /// Locations file (YAML)
    #[arg(long, default_value = "config/locations.yaml", env = "WX_LOCATIONS_FILE")]
    locations: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "WX_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;
    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics exporter initialized");

    let config = ProvidersConfig::from_env();
    for key in config.missing_keys() {
        warn!(key = key, "API key not set; affected sources will report a config error");
    }

    let locations = LocationsConfig::load_or_default(&args.locations)
        .with_context(|| format!("Failed to load locations from {}", args.locations.display()))?;
    info!(count = locations.locations.len(), "Locations loaded");

    let state = Arc::new(AppState::new(&config, locations, Some(prometheus_handle))?);
    let app = wx_api::router(state);

    let addr: SocketAddr = args.listen.parse().context("Invalid listen address")?;
    info!("Weather API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Weather API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
