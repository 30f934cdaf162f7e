//! # album-feedback
//!
//! User feedback for the album console: resolving API failures to display
//! messages, reporting them as toasts without duplicates, and an in-memory
//! toast center implementing the notification sink.

pub mod normalizer;
pub mod reporter;
pub mod toast;

pub use normalizer::{DEFAULT_RETRY_AFTER_SECS, resolve_message, retry_after_seconds};
pub use reporter::{ErrorReporter, RATE_LIMIT_TOAST_ID, notify_failure};
pub use toast::{Toast, ToastCenter};
