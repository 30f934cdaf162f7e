//! Integration tests for the profile page flows.

mod helpers;

use album_core::error::ErrorKind;
use album_core::failure::ResponseFailure;
use album_core::types::toast::ToastLevel;
use album_ui::profile::{PageView, SubmitOutcome, SubmitRejection, ValidationError};
use helpers::{AuthCall, TestApp};
use serde_json::json;

#[tokio::test(start_paused = true)]
async fn test_page_loads_then_saves_profile() {
    let app = TestApp::new();
    let mut page = app.page();
    assert!(matches!(page.view(), PageView::Loading { .. }));

    app.sign_in("maria");
    assert!(page.refresh());

    page.profile_form_mut().set_username(" maria.silva ");
    page.profile_form_mut().set_email("maria.silva@example.com");
    let outcome = page.submit_profile().await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    assert_eq!(
        app.service.calls(),
        vec![AuthCall::UpdateProfile {
            username: "maria.silva".to_string(),
            email: "maria.silva@example.com".to_string(),
        }]
    );
    let toasts = app.console.toasts().visible();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "Profile updated successfully!");
}

#[tokio::test(start_paused = true)]
async fn test_short_username_rejected_without_call() {
    let app = TestApp::new();
    app.sign_in("maria");
    let mut page = app.page();

    page.profile_form_mut().set_username("ab");
    let outcome = page.submit_profile().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(SubmitRejection::Invalid(ValidationError::UsernameLength))
    );
    assert!(app.service.calls().is_empty());
    assert_eq!(
        app.toast_messages(),
        vec!["Username must be between 3 and 50 characters"]
    );
    assert!(page.profile_form().can_submit());
}

#[tokio::test(start_paused = true)]
async fn test_conflict_keeps_edits_and_shows_server_message() {
    let app = TestApp::new();
    app.sign_in("maria");
    let mut page = app.page();
    app.service.push_result(Err(ResponseFailure::new(409)
        .with_body(json!({ "detail": "Username already taken" }))
        .into()));

    page.profile_form_mut().set_username("joana");
    let outcome = page.submit_profile().await;

    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Conflict));
    assert_eq!(page.profile_form().username(), "joana");
    assert_eq!(app.toast_messages(), vec!["Username already taken"]);
}

#[tokio::test(start_paused = true)]
async fn test_password_change_clears_only_on_success() {
    let app = TestApp::new();
    app.sign_in("maria");
    let mut page = app.page();
    app.service
        .push_result(Err(ResponseFailure::new(400).with_body("Senha atual incorreta").into()));

    let form = page.password_form_mut();
    form.set_current("wrong-pass");
    form.set_new("new-secret");
    form.set_confirmation("new-secret");

    let first = page.submit_password().await;
    assert_eq!(first, SubmitOutcome::Failed(ErrorKind::Validation));
    assert_eq!(page.password_form().fields().current, "wrong-pass");

    page.password_form_mut().set_current("old-secret");
    let second = page.submit_password().await;
    assert_eq!(second, SubmitOutcome::Saved);
    assert!(page.password_form().fields().is_empty());

    assert_eq!(
        app.service.calls().last(),
        Some(&AuthCall::ChangePassword {
            current: "old-secret".to_string(),
            new: "new-secret".to_string(),
        })
    );
    assert_eq!(
        app.toast_messages(),
        vec!["Senha atual incorreta", "Password changed successfully!"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_refresh_overwrites_edits() {
    let app = TestApp::new();
    app.sign_in("maria");
    let mut page = app.page();

    page.profile_form_mut().set_email("draft@example.com");
    assert!(!page.refresh());
    assert_eq!(page.profile_form().email(), "draft@example.com");

    app.sign_in("joana");
    assert!(page.refresh());
    assert_eq!(page.profile_form().email(), "joana@example.com");
}

#[tokio::test(start_paused = true)]
async fn test_portuguese_messages() {
    let app = TestApp::portuguese();
    app.sign_in("maria");
    let mut page = app.page();

    match page.view() {
        PageView::Ready(summary) => {
            assert_eq!(summary.status_label, "Conta ativa");
            assert_eq!(summary.roles, "USER");
        }
        other => panic!("expected ready view, got {other:?}"),
    }

    page.profile_form_mut().set_email("sem-arroba");
    page.submit_profile().await;
    assert_eq!(app.toast_messages(), vec!["E-mail inválido"]);
}
