//! Relay handler forwarding host status lookups to the upstream endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;

use crate::http::state::AppState;
use crate::http::types::ProxyRequest;

/// Relay a host status lookup to the upstream endpoint.
///
/// The body is parsed by hand so that a missing body, a malformed one,
/// and a missing `ip` key all get the route's own 400 instead of an
/// extractor rejection.
///
/// # Parameters
///
/// - `state` - Application state with the upstream client
/// - `body` - Request body, expected to be `{"ip": "<address>"}`
///
/// # Returns
///
/// Returns the upstream JSON unchanged on success, 400 when the `ip`
/// parameter is absent, or 500 when the upstream call fails.
pub async fn proxy(State(state): State<AppState>, body: Bytes) -> Response {
    let request = serde_json::from_slice::<ProxyRequest>(&body).unwrap_or_default();
    let Some(ip) = request.ip else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "IP parameter is missing" })),
        )
            .into_response();
    };

    match state.upstream.host_status(&ip).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => err.into_response(),
    }
}
