//! Cross-origin request policy.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Builds the CORS layer from the configured origin list.
///
/// An empty list or a `*` entry allows any origin, method and header, which
/// is what browser front-ends of this service expect during development.
/// Otherwise only the listed origins are allowed; entries that are not valid
/// header values are skipped with a warning.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn preflight(allowed: &[String], origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(layer(allowed));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let allowed = vec!["*".to_string()];
        assert_eq!(
            preflight(&allowed, "https://app.example.com").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let allowed = vec!["https://app.example.com".to_string()];
        assert_eq!(
            preflight(&allowed, "https://app.example.com").await.as_deref(),
            Some("https://app.example.com")
        );
        assert_eq!(preflight(&allowed, "https://evil.example.com").await, None);
    }
}
