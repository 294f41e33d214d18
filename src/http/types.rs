//! API types and parameters for HTTP handlers.

use serde::Deserialize;

/// Request body for the `/proxy` endpoint.
///
/// `ip` is optional so the handler can report the missing parameter with
/// its own error shape instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ProxyRequest {
    /// Address of the host to look up
    pub ip: Option<String>,
}

/// Request body for the `/historical-data` endpoint.
///
/// All four fields are required by the handler; they stay optional here
/// for the same reason as [`ProxyRequest::ip`].
#[derive(Debug, Default, Deserialize)]
pub struct HistoryRequest {
    /// Upstream identifier of the host
    pub hostid: Option<String>,
    /// Measured property to read (e.g. `cpu`)
    pub property: Option<String>,
    /// Window start, upstream datetime format
    pub start_datetime: Option<String>,
    /// Window end, upstream datetime format
    pub end_datetime: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test ProxyRequest deserialization.
    #[test]
    fn test_proxy_request_deserialization() {
        let json = r#"{"ip": "10.0.0.7"}"#;
        let request: ProxyRequest = serde_json::from_str(json).expect("valid JSON");
        assert_eq!(request.ip.as_deref(), Some("10.0.0.7"));
    }

    /// Test ProxyRequest with the parameter absent.
    #[test]
    fn test_proxy_request_missing_ip() {
        let request: ProxyRequest = serde_json::from_str("{}").expect("valid JSON");
        assert!(request.ip.is_none());
    }

    /// Test ProxyRequest rejects a non-string ip.
    #[test]
    fn test_proxy_request_non_string_ip() {
        assert!(serde_json::from_str::<ProxyRequest>(r#"{"ip": 7}"#).is_err());
    }

    /// Test HistoryRequest deserialization with partial fields.
    #[test]
    fn test_history_request_partial() {
        let json = r#"{"hostid": "gw-01", "property": "cpu"}"#;
        let request: HistoryRequest = serde_json::from_str(json).expect("valid JSON");
        assert_eq!(request.hostid.as_deref(), Some("gw-01"));
        assert_eq!(request.property.as_deref(), Some("cpu"));
        assert!(request.start_datetime.is_none());
        assert!(request.end_datetime.is_none());
    }
}
