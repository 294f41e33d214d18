//! HTTP routing configuration for all endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::http::handlers::*;
use crate::http::state::AppState;

/// Build the Axum router with all endpoints.
///
/// # Parameters
///
/// - `state` - Application state containing the upstream client
///
/// # Returns
///
/// Returns configured Axum `Router` with the dashboard pages and relay
/// endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        // Dashboard pages
        .route("/main_page", get(main_page))
        .route("/datas", get(datas))
        .route("/graphs", get(graphs))
        .route("/locations", get(locations))
        // Upstream relay API
        .route("/proxy", post(proxy))
        .route("/hosts", post(hosts))
        .route("/positions", post(positions))
        .route("/historical-data", post(historical_data))
        .layer(cors_layer())
        .with_state(state)
}

/// The dashboard pages may be opened from other hosts or straight from
/// disk, so cross-origin requests are allowed from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
