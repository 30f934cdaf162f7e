//! Integration tests for failure reporting through the toast center.

mod helpers;

use std::time::Duration;

use album_core::failure::{Failure, ResponseFailure};
use album_core::types::toast::ToastId;
use album_feedback::RATE_LIMIT_TOAST_ID;
use helpers::TestApp;
use serde_json::json;

fn rate_limited(retry_after: &str) -> Failure {
    ResponseFailure::new(429)
        .with_header("Retry-After", retry_after)
        .with_body(json!({ "message": "Rate limit exceeded" }))
        .into()
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_toasts_collapse() {
    let app = TestApp::new();
    let reporter = app.console.reporter();

    reporter.notify(&rate_limited("30"), "fallback");
    reporter.notify(&rate_limited("12"), "fallback");
    reporter.notify(&rate_limited("later"), "fallback");

    let toasts = app.console.toasts().visible();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].id, Some(ToastId::new(RATE_LIMIT_TOAST_ID)));
    assert_eq!(
        toasts[0].message,
        "Too many requests. Wait 6 seconds and try again."
    );
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_in_portuguese() {
    let app = TestApp::portuguese();
    app.console.reporter().notify(&rate_limited("30"), "Falha");

    assert_eq!(
        app.toast_messages(),
        vec!["Muitas requisições. Aguarde 30 segundos e tente novamente."]
    );
}

#[tokio::test(start_paused = true)]
async fn test_handled_failures_stay_silent() {
    let app = TestApp::new();
    let reporter = app.console.reporter();

    reporter.notify(&rate_limited("30").into_handled(), "fallback");
    reporter.notify(&Failure::native("Failed to fetch").into_handled(), "fallback");

    assert!(app.toast_messages().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_ingested_failures_resolve_like_the_browser() {
    let app = TestApp::new();
    let reporter = app.console.reporter();

    let network = Failure::from_value(&json!({ "name": "TypeError", "message": "Failed to fetch" }));
    let validation = Failure::from_value(&json!({
        "message": "Request failed with status code 422",
        "response": { "status": 422, "data": { "errors": ["Email is invalid"] } }
    }));
    let already_shown = Failure::from_value(&json!({
        "response": { "status": 429, "headers": { "retry-after": "5" } },
        "_rateLimitHandled": true
    }));

    reporter.notify(&network, "fallback");
    reporter.notify(&validation, "fallback");
    reporter.notify(&already_shown, "fallback");
    reporter.notify(&Failure::from_value(&json!(null)), "Failed to change password");

    assert_eq!(
        app.toast_messages(),
        vec![
            "Connection error. Check your internet connection.",
            "Email is invalid",
            "Failed to change password",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_toasts_expire_after_configured_duration() {
    let app = TestApp::new();
    app.console.reporter().error("Fill in all fields");
    assert_eq!(app.toast_messages().len(), 1);

    tokio::time::advance(Duration::from_millis(app.console.config().toasts.duration_ms)).await;
    assert!(app.toast_messages().is_empty());
}
