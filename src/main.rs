//! match-request demonstration server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ match middleware ─┬─▶ match handler
//!                                                              │   (configured status,
//!                                                              │    matched condition)
//!                                                              └─▶ fall-through stage
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use match_request::config::{load_config, AppConfig};
use match_request::http::HttpServer;
use match_request::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "match-request")]
#[command(about = "Serve requests through the URL match middleware", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Log every match.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if cli.verbose {
        config.matching.verbose = true;
    }

    logging::init_tracing(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        conditions = config.matching.conditions.len(),
        verbose = config.matching.verbose,
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

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
