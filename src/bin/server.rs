//! Fuelscope server
//!
//! Serves the frontend bundle, the three CSV data files, and the dataset
//! manifest API. Run with: cargo run --bin fuelscope-server
//!
//! # Configuration
//!
//! Flags override environment variables, which override the config file:
//! - `--config <path>`: TOML config file
//! - `--host`, `--port`: bind address
//! - `--data-dir`: directory with the three CSVs
//! - `--static-dir`: built frontend bundle
//! - `RUST_LOG`: log filter (default from config)

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fuelscope::api::{serve, AppState};
use fuelscope::config::Config;
use fuelscope::dataset::{Family, SeriesLoader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fuelscope-server", version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding the three CSV files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory with the built frontend bundle
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_env();
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }
    if let Some(dir) = args.static_dir {
        config.api.static_dir = dir;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Fuelscope server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {:?}", config.data.dir);
    tracing::info!("Static directory: {:?}", config.api.static_dir);

    // Load the three series once, sequentially. A failed load is logged by
    // the loader and leaves its slot empty; the frontend shows an empty
    // chart for it.
    let store = SeriesLoader::new().load_all(&config.data.dir);
    for family in Family::all() {
        if !store.is_loaded(*family) {
            tracing::warn!(
                family = family.name(),
                "dataset unavailable, its chart will render empty"
            );
        }
    }

    let state = AppState::new(Arc::new(store));
    serve(state, &config.api, &config.data.dir).await?;

    Ok(())
}
