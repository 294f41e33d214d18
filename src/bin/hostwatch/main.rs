//! # Host Monitoring Dashboard Gateway
//!
//! Command-line entry point for the dashboard backend.
//!
//! Serves the static dashboard pages and relays status lookups and bulk
//! commands to the upstream endpoint.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hostwatch_rs::http::{build_router, AppState};
use hostwatch_rs::upstream::UpstreamClient;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let upstream = UpstreamClient::new(cli.upstream).map_err(io::Error::other)?;
    let state = AppState::new(upstream);
    let app = build_router(state);

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    tracing::info!("starting hostwatch on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
