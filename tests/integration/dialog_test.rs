//! Integration tests for dialogs.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use album_core::failure::{Failure, ResponseFailure};
use album_ui::dialog::{ConfirmOutcome, MODAL_TITLE_ID, Modal};
use helpers::TestApp;
use serde_json::json;

#[tokio::test(start_paused = true)]
async fn test_failed_delete_reports_and_stays_open() {
    let app = TestApp::new();
    let reporter = app.console.reporter().clone();
    let mut dialog = app
        .console
        .delete_dialog("Delete album", "This action cannot be undone.")
        .with_item_name("Kind of Blue");
    dialog.open();

    let result = dialog
        .confirm(|| async {
            Err::<(), Failure>(
                ResponseFailure::new(409)
                    .with_body(json!({ "message": "Album has tracks" }))
                    .into(),
            )
        })
        .await;

    if let Err(failure) = &result {
        reporter.notify(failure, "Failed to delete album");
    }

    assert!(result.is_err());
    assert!(dialog.is_open());
    assert!(!dialog.is_loading());
    assert_eq!(app.toast_messages(), vec!["Album has tracks"]);
}

#[tokio::test(start_paused = true)]
async fn test_successful_delete_closes() {
    let app = TestApp::portuguese();
    let deleted = Arc::new(AtomicUsize::new(0));
    let mut dialog = app.console.delete_dialog("Excluir álbum", "Tem certeza?");
    dialog.open();

    let counter = deleted.clone();
    let outcome = dialog
        .confirm(|| async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<(), Failure>(())
        })
        .await;

    assert_eq!(outcome, Ok(ConfirmOutcome::Confirmed));
    assert_eq!(deleted.load(Ordering::SeqCst), 1);
    assert!(!dialog.is_open());
    assert_eq!(dialog.confirm_button_label(), "Excluir");
}

#[test]
fn test_modal_hook_sees_backdrop_close() {
    let closes = Arc::new(AtomicUsize::new(0));
    let counter = closes.clone();
    let mut modal = Modal::new(vec!["title", "artist"])
        .with_title("Edit album")
        .on_close(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    assert!(modal.content().is_none());
    modal.open();
    assert_eq!(modal.content().map(|c| c.labelled_by), Some(Some(MODAL_TITLE_ID)));

    modal.click_backdrop();
    assert!(modal.content().is_none());
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}
