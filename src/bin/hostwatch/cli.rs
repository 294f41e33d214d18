//! Command-line interface definitions for the dashboard gateway.

use clap::Parser;

use hostwatch_rs::upstream::DEFAULT_UPSTREAM_URL;

/// Command-line arguments for the dashboard gateway.
#[derive(Debug, Parser)]
#[command(name = "hostwatch")]
#[command(
    author,
    version,
    about = "Host monitoring dashboard gateway: static pages plus an upstream JSON relay"
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// URL of the upstream status endpoint
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream: String,
}
