//! Static dashboard pages and the health check.
//!
//! The dashboard UI is four fixed HTML pages compiled into the binary.
//! There is no templating step; the files are served as-is.

use axum::response::Html;

/// Health check endpoint.
///
/// # Returns
///
/// Returns "ok" if the server is healthy.
pub async fn healthz() -> &'static str {
    "ok"
}

/// Landing page of the dashboard.
pub async fn main_page() -> Html<&'static str> {
    Html(include_str!("../../../templates/main_page.html"))
}

/// Live host data table.
pub async fn datas() -> Html<&'static str> {
    Html(include_str!("../../../templates/weblap.html"))
}

/// Measurement graphs.
pub async fn graphs() -> Html<&'static str> {
    Html(include_str!("../../../templates/graphs.html"))
}

/// Host location map.
pub async fn locations() -> Html<&'static str> {
    Html(include_str!("../../../templates/locations.html"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    /// Test the health check answer.
    #[tokio::test]
    async fn test_healthz() {
        assert_eq!(healthz().await, "ok");
    }

    /// Test every page handler serves HTML with a 200.
    #[tokio::test]
    async fn test_pages_serve_html() {
        for response in [
            main_page().await.into_response(),
            datas().await.into_response(),
            graphs().await.into_response(),
            locations().await.into_response(),
        ] {
            assert_eq!(response.status(), StatusCode::OK);

            let content_type = response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .expect("content type")
                .to_str()
                .expect("ascii header");
            assert!(content_type.starts_with("text/html"));

            let (_, body) = response.into_parts();
            let body_bytes = axum::body::to_bytes(body, usize::MAX).await.expect("read body");
            assert!(!body_bytes.is_empty());
        }
    }
}
