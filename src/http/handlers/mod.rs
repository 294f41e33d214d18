//! HTTP handlers for different endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::upstream::UpstreamError;

pub mod commands;
pub mod pages;
pub mod proxy;

// Re-export handlers for easier access
pub use commands::{historical_data, hosts, positions};
pub use pages::{datas, graphs, healthz, locations, main_page};
pub use proxy::proxy;

/// Every relay failure becomes a 500 with a single `error` string, the
/// shape the dashboard pages expect.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match &self {
            UpstreamError::Request(err) => tracing::error!("upstream request failed: {err}"),
            UpstreamError::Decode => tracing::error!("upstream returned a non-JSON body"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": self.to_string() })))
            .into_response()
    }
}
