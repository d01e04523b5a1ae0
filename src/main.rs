//! Settlements dashboard server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum (trace, request id, timeout)
//!                        │
//!                        ├── /static/* ──▶ ServeDir
//!                        │
//!                        └── fallback ──▶ routing::Router
//!                                            │  literal > :param > *catch_all
//!                                            │  404 / 405 / handler
//!                                            ▼
//!                                  middleware chain (logger, headers)
//!                                            ▼
//!                                  web::DashboardController
//!                                            │
//!                                  stats aggregations over data::CityRepo
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use settlements_web::config::load_with_env;
use settlements_web::lifecycle::{build_router, shutdown_signal};
use settlements_web::observability::init_logging;
use settlements_web::HttpServer;

#[derive(Parser)]
#[command(name = "settlements-web")]
#[command(about = "Settlement statistics dashboard", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_with_env(&cli.config)?;
    init_logging(&config.observability);

    tracing::info!("settlements-web v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        cities_path = %config.data.cities_path,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let router = build_router(&config)?;

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    HttpServer::new(&config, router)
        .run(listener, shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
