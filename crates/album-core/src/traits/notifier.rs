//! Notification sink abstraction.

use crate::types::toast::ToastOptions;

/// Destination of user-visible notifications.
///
/// Calls sharing a [`ToastOptions::id`] must collapse into a single visible
/// notification; calls without an id are shown independently.
pub trait NotificationSink: Send + Sync {
    /// Show an error notification.
    fn error(&self, message: &str, options: ToastOptions);

    /// Show a success notification.
    fn success(&self, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn error(&self, message: &str, options: ToastOptions) {
        (**self).error(message, options);
    }

    fn success(&self, message: &str) {
        (**self).success(message);
    }
}
