//! Integration tests for the landing page, probes and CORS.
//!
//! Run with: cargo test -p review-service --test health_check

use review_service::config::ReviewConfig;
use review_service::services::providers::mock::MockTextProvider;
use review_service::startup::Application;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application on a random port with the given provider and
/// return the port number.
async fn spawn_app(provider: MockTextProvider) -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GOOGLE_API_KEY", "test-api-key");

    let config = ReviewConfig::load().expect("Failed to load config");
    let app = Application::build_with_provider(config, Arc::new(provider))
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(MockTextProvider::replying("fine")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "review-service");
}

#[tokio::test]
async fn readiness_check_returns_ok_with_healthy_provider() {
    let port = spawn_app(MockTextProvider::replying("fine")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn readiness_check_reports_unconfigured_provider() {
    let port = spawn_app(MockTextProvider::unconfigured()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn landing_page_returns_html() {
    let port = spawn_app(MockTextProvider::replying("fine")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Generate review"));
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let port = spawn_app(MockTextProvider::replying("fine")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .header("origin", "http://some-other-site.example")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let port = spawn_app(MockTextProvider::replying("fine")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .header("x-request-id", "test-request-id")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-request-id")
    );
}
