//! Application state for the HTTP server.

use crate::upstream::UpstreamClient;

/// Application state shared across all HTTP handlers.
///
/// The relay handlers have a single outbound dependency, the upstream
/// status client. Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream status endpoint
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create new application state around the given upstream client.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}
