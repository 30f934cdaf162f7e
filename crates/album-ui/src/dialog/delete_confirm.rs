//! Confirmation dialog for destructive actions.

use std::future::Future;

use tracing::debug;

use album_core::config::MessageCatalog;

/// Result of [`DeleteConfirmModal::confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The callback succeeded and the modal closed.
    Confirmed,
    /// The modal was closed or already confirming; the callback did not run.
    Ignored,
}

/// Asks the user to confirm a deletion and runs the deletion callback.
///
/// While the callback is in flight the modal is `loading`: it cannot be
/// dismissed and both buttons are disabled. It closes only after the
/// callback succeeds; on failure it stays open and the error goes back to
/// the caller.
#[derive(Debug, Clone)]
pub struct DeleteConfirmModal {
    open: bool,
    loading: bool,
    title: String,
    description: String,
    item_name: Option<String>,
    confirm_label: String,
    cancel_label: String,
    loading_label: String,
}

impl DeleteConfirmModal {
    /// Create a closed modal with labels from `catalog`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        catalog: &MessageCatalog,
    ) -> Self {
        Self {
            open: false,
            loading: false,
            title: title.into(),
            description: description.into(),
            item_name: None,
            confirm_label: catalog.delete_label.clone(),
            cancel_label: catalog.cancel_label.clone(),
            loading_label: catalog.deleting_label.clone(),
        }
    }

    /// Name of the item being deleted, shown quoted under the description.
    pub fn with_item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    /// Item name wrapped in double quotes.
    pub fn quoted_item_name(&self) -> Option<String> {
        self.item_name.as_ref().map(|name| format!("\"{name}\""))
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    /// Confirm button text; the loading label while confirming.
    pub fn confirm_button_label(&self) -> &str {
        if self.loading {
            &self.loading_label
        } else {
            &self.confirm_label
        }
    }

    /// Whether the confirm and cancel buttons accept clicks.
    pub fn buttons_enabled(&self) -> bool {
        !self.loading
    }

    /// Show the modal.
    pub fn open(&mut self) {
        self.request_open_change(true);
    }

    /// Open or close at the user's request. Ignored while loading; returns
    /// whether the change applied.
    pub fn request_open_change(&mut self, open: bool) -> bool {
        if self.loading {
            debug!(open, "Dialog open change ignored while confirming");
            return false;
        }
        self.open = open;
        true
    }

    /// Dismiss via the cancel button.
    pub fn cancel(&mut self) -> bool {
        self.request_open_change(false)
    }

    /// Enter `loading`. Returns false if closed or already confirming.
    pub fn begin_confirm(&mut self) -> bool {
        if !self.open || self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Leave `loading`, closing the modal when the callback succeeded.
    pub fn finish_confirm(&mut self, succeeded: bool) {
        self.loading = false;
        if succeeded {
            self.open = false;
        }
    }

    /// Run `on_confirm` with the modal in `loading`.
    pub async fn confirm<F, Fut, E>(&mut self, on_confirm: F) -> Result<ConfirmOutcome, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        if !self.begin_confirm() {
            return Ok(ConfirmOutcome::Ignored);
        }

        let result = on_confirm().await;
        self.finish_confirm(result.is_ok());
        result.map(|()| ConfirmOutcome::Confirmed)
    }
}
