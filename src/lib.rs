//! # Hostwatch Gateway Library
//!
//! A library for the host monitoring dashboard backend.
//!
//! This library provides components for:
//! - **Dashboard Pages**: Serves the static monitoring UI pages at fixed routes
//! - **Status Relay**: Forwards host lookups to the upstream status endpoint
//!   and relays its JSON response or a structured error
//! - **Command Relay**: Forwards the upstream's bulk form-encoded commands
//!   (`hosts`, `positions`, historical queries)
//!
//! # Examples
//!
//! ```no_run
//! use hostwatch_rs::http::{build_router, AppState};
//! use hostwatch_rs::upstream::{UpstreamClient, DEFAULT_UPSTREAM_URL};
//!
//! # fn example() -> reqwest::Result<()> {
//! // Create the client for the upstream status endpoint
//! let upstream = UpstreamClient::new(DEFAULT_UPSTREAM_URL)?;
//!
//! // Build HTTP router with state
//! let app = build_router(AppState::new(upstream));
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod upstream;

// Re-export commonly used types for convenience
pub use upstream::{UpstreamClient, UpstreamError};
