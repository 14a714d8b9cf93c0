/// Calculation endpoint
pub mod handlers;
/// The HTML page
pub mod page;
/// JSON payload of the calculation endpoint
pub mod response;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::services::health::HealthService;

/// Application router: the page and calculation on `/`, plus health routes
pub fn router() -> Router {
    Router::new()
        .route("/", post(handlers::calculate).fallback(page::index_page))
        .merge(HealthService::new().router)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_put_renders_page() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_post_without_form_body_gets_failure_payload() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"year":2021}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
    }
}
