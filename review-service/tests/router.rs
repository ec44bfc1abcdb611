//! Router-level tests that exercise the app without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use review_service::config::{GeminiSettings, ReviewConfig, ReviewSettings, SecuritySettings};
use review_service::services::providers::mock::MockTextProvider;
use review_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_state(provider: MockTextProvider) -> AppState {
    AppState {
        config: ReviewConfig {
            common: service_core::config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            gemini: GeminiSettings {
                api_key: String::new(),
                model: "gemini-2.0-flash".to_string(),
            },
            review: ReviewSettings {
                highlights: vec![],
                temperature: None,
                top_p: None,
                max_output_tokens: None,
            },
            security: SecuritySettings {
                allowed_origins: vec!["*".to_string()],
            },
        },
        text_provider: Arc::new(provider),
    }
}

#[tokio::test]
async fn landing_page_works() {
    let app = build_router(test_state(MockTextProvider::replying("fine")));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let app = build_router(test_state(MockTextProvider::replying("fine")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_review_works_through_the_router() {
    let app = build_router(test_state(MockTextProvider::replying("Great spot")));

    let request = Request::builder()
        .method("POST")
        .uri("/generate-review")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"name": "The Corner Cafe", "traits": ["cozy"]}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_review_requires_a_json_body() {
    let app = build_router(test_state(MockTextProvider::replying("fine")));

    let request = Request::builder()
        .method("POST")
        .uri("/generate-review")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}
