//! Relay handlers for the upstream's bulk commands.
//!
//! These mirror the endpoint's form-encoded POST interface: each handler
//! forwards one fixed command, or the validated history parameters, and
//! relays the JSON answer unchanged.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;

use crate::http::state::AppState;
use crate::http::types::HistoryRequest;
use crate::upstream::HistoryQuery;

/// List every monitored host.
pub async fn hosts(State(state): State<AppState>) -> Response {
    match state.upstream.command("hosts").await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Fetch the current map positions of all hosts.
pub async fn positions(State(state): State<AppState>) -> Response {
    match state.upstream.command("positions").await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Fetch measurement history for one host property over a time window.
///
/// All four parameters are required; one 400 names the full list so the
/// caller does not discover them one at a time.
pub async fn historical_data(State(state): State<AppState>, body: Bytes) -> Response {
    let request = serde_json::from_slice::<HistoryRequest>(&body).unwrap_or_default();
    let (Some(hostid), Some(property), Some(start_datetime), Some(end_datetime)) =
        (request.hostid, request.property, request.start_datetime, request.end_datetime)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Missing required parameters: hostid, property, start_datetime, end_datetime"
            })),
        )
            .into_response();
    };

    let query = HistoryQuery { hostid, property, start_datetime, end_datetime };
    match state.upstream.history(&query).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => err.into_response(),
    }
}
