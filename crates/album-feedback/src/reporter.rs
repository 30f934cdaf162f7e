//! Turns failures into error toasts.

use std::sync::Arc;

use tracing::{debug, warn};

use album_core::config::MessageCatalog;
use album_core::failure::Failure;
use album_core::traits::NotificationSink;
use album_core::types::toast::{ToastId, ToastOptions};

use crate::normalizer::resolve_message;

/// Toast id shared by every rate-limit notification so they collapse into one.
pub const RATE_LIMIT_TOAST_ID: &str = "rate-limit";

/// Show `failure` as an error toast.
///
/// Failures already reported upstream are dropped. Rate-limit failures are
/// sent under [`RATE_LIMIT_TOAST_ID`]; everything else stacks.
pub fn notify_failure(
    sink: &dyn NotificationSink,
    catalog: &MessageCatalog,
    failure: &Failure,
    fallback: &str,
) {
    if failure.is_handled() {
        debug!(kind = %failure.kind(), "Failure already reported upstream; toast skipped");
        return;
    }

    let message = resolve_message(failure, fallback, catalog);
    let options = if failure.is_rate_limited() {
        ToastOptions {
            id: Some(ToastId::new(RATE_LIMIT_TOAST_ID)),
        }
    } else {
        ToastOptions::default()
    };

    warn!(kind = %failure.kind(), %message, "API call failed");
    sink.error(&message, options);
}

/// Pairs a notification sink with the active message catalog.
#[derive(Clone)]
pub struct ErrorReporter {
    /// Where toasts go.
    sink: Arc<dyn NotificationSink>,
    /// Localized strings.
    catalog: Arc<MessageCatalog>,
}

impl std::fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl ErrorReporter {
    /// Creates a reporter.
    pub fn new(sink: Arc<dyn NotificationSink>, catalog: MessageCatalog) -> Self {
        Self {
            sink,
            catalog: Arc::new(catalog),
        }
    }

    /// The active catalog.
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Resolve the display message for `failure`.
    pub fn resolve(&self, failure: &Failure, fallback: &str) -> String {
        resolve_message(failure, fallback, &self.catalog)
    }

    /// Resolve with the catalog's generic fallback.
    pub fn resolve_default(&self, failure: &Failure) -> String {
        self.resolve(failure, &self.catalog.unexpected_error)
    }

    /// Show `failure` as an error toast; see [`notify_failure`].
    pub fn notify(&self, failure: &Failure, fallback: &str) {
        notify_failure(self.sink.as_ref(), &self.catalog, failure, fallback);
    }

    /// Show a validation or other local error message.
    pub fn error(&self, message: &str) {
        self.sink.error(message, ToastOptions::default());
    }

    /// Show a success message.
    pub fn success(&self, message: &str) {
        self.sink.success(message);
    }
}
