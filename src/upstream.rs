//! HTTP client for the legacy status endpoint.
//!
//! The endpoint is a single PHP script that answers both GET lookups
//! (`?currentHost=<ip>`) and form-encoded POST commands (`hosts`,
//! `positions`, historical queries). It serves a certificate the system
//! store rejects, so certificate verification is disabled for this client.

use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Production status endpoint queried by the relay handlers.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://mazsola.iit.uni-miskolc.hu/~qgeroli5/fgsz/index.php";

/// Errors surfaced to dashboard clients by the relay handlers.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure or non-success HTTP status from the upstream.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    /// Upstream answered but the body was not valid JSON.
    #[error("Invalid JSON response")]
    Decode,
}

/// Parameters of a historical-data query, forwarded verbatim as form fields.
#[derive(Debug, Serialize)]
pub struct HistoryQuery {
    pub hostid: String,
    pub property: String,
    pub start_datetime: String,
    pub end_datetime: String,
}

/// Client for the upstream status endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    /// Look up the status of a single host.
    ///
    /// # Parameters
    ///
    /// - `ip` - Address of the host, passed as the `currentHost` query parameter
    ///
    /// # Returns
    ///
    /// Returns the decoded JSON body on success.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Request`] on transport failure or a
    /// non-success status, [`UpstreamError::Decode`] on a non-JSON body.
    pub async fn host_status(&self, ip: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("currentHost", ip)])
            .send()
            .await?
            .error_for_status()?;
        decode_json(response).await
    }

    /// Issue a bare command (`hosts`, `positions`) as a form-encoded POST.
    ///
    /// The endpoint expects the command name itself as the request body.
    pub async fn command(&self, command: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(&self.base_url)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::ACCEPT, "application/json")
            .body(command.to_owned())
            .send()
            .await?
            .error_for_status()?;
        decode_json(response).await
    }

    /// Query measurement history for one host property over a time window.
    pub async fn history(&self, query: &HistoryQuery) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(&self.base_url)
            .header(header::ACCEPT, "application/json")
            .form(query)
            .send()
            .await?
            .error_for_status()?;
        decode_json(response).await
    }
}

/// Decode an upstream response body as JSON.
///
/// A body that arrives intact but fails to parse maps to
/// [`UpstreamError::Decode`]; transport failures keep their own message.
async fn decode_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|_| UpstreamError::Decode)
}
