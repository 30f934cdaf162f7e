//! In-memory toast center.

use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use album_core::config::ToastConfig;
use album_core::traits::NotificationSink;
use album_core::types::toast::{ToastId, ToastLevel, ToastOptions};

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Deduplication id, if the caller supplied one.
    pub id: Option<ToastId>,
    /// Severity.
    pub level: ToastLevel,
    /// Text shown to the user.
    pub message: String,
    /// When the toast was last (re)shown.
    pub shown_at: Instant,
}

/// Holds visible toasts, collapsing those that share an id.
///
/// A toast carrying an id already on screen replaces that toast in place and
/// restarts its timer. Toasts expire after the configured duration and the
/// oldest are evicted past `max_visible`.
#[derive(Debug)]
pub struct ToastCenter {
    /// Display time of a toast.
    duration: Duration,
    /// Maximum number of toasts on screen.
    max_visible: usize,
    /// Visible toasts, oldest first.
    toasts: Mutex<Vec<Toast>>,
}

impl ToastCenter {
    /// Create a toast center from configuration.
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.duration_ms),
            max_visible: config.max_visible.max(1),
            toasts: Mutex::new(Vec::new()),
        }
    }

    /// Toasts currently on screen, oldest first. Expired toasts are dropped.
    pub fn visible(&self) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        toasts.retain(|t| now.duration_since(t.shown_at) < self.duration);
        toasts.clone()
    }

    /// Remove the toast with `id`. Returns whether one was on screen.
    pub fn dismiss(&self, id: &ToastId) -> bool {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        let before = toasts.len();
        toasts.retain(|t| t.id.as_ref() != Some(id));
        toasts.len() != before
    }

    /// Remove every toast.
    pub fn clear(&self) {
        self.toasts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    fn show(&self, level: ToastLevel, message: &str, id: Option<ToastId>) {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();

        if let Some(id) = &id {
            if let Some(existing) = toasts.iter_mut().find(|t| t.id.as_ref() == Some(id)) {
                tracing::trace!(toast_id = %id, "Toast replaced in place");
                existing.level = level;
                existing.message = message.to_string();
                existing.shown_at = now;
                return;
            }
        }

        toasts.push(Toast {
            id,
            level,
            message: message.to_string(),
            shown_at: now,
        });

        if toasts.len() > self.max_visible {
            let overflow = toasts.len() - self.max_visible;
            toasts.drain(..overflow);
        }
    }
}

impl NotificationSink for ToastCenter {
    fn error(&self, message: &str, options: ToastOptions) {
        self.show(ToastLevel::Error, message, options.id);
    }

    fn success(&self, message: &str) {
        self.show(ToastLevel::Success, message, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_center() -> ToastCenter {
        ToastCenter::new(&ToastConfig {
            duration_ms: 4000,
            max_visible: 3,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_id_collapses() {
        let center = make_center();
        center.error("Wait 30 seconds", ToastOptions::with_id("rate-limit"));
        center.error("Wait 12 seconds", ToastOptions::with_id("rate-limit"));

        let visible = center.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "Wait 12 seconds");
        assert_eq!(visible[0].id, Some(ToastId::new("rate-limit")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_without_id_stacks() {
        let center = make_center();
        center.error("Failed to update profile", ToastOptions::default());
        center.error("Failed to update profile", ToastOptions::default());
        center.success("Password changed successfully!");

        let visible = center.visible();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[2].level, ToastLevel::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_oldest_evicted_past_limit() {
        let center = make_center();
        for i in 0..5 {
            center.error(&format!("error {i}"), ToastOptions::default());
        }

        let messages: Vec<String> = center.visible().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["error 2", "error 3", "error 4"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire() {
        let center = make_center();
        center.error("first", ToastOptions::default());
        tokio::time::advance(Duration::from_millis(3000)).await;
        center.error("second", ToastOptions::default());
        tokio::time::advance(Duration::from_millis(1500)).await;

        let visible = center.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacement_restarts_timer() {
        let center = make_center();
        center.error("Wait 30 seconds", ToastOptions::with_id("rate-limit"));
        tokio::time::advance(Duration::from_millis(3000)).await;
        center.error("Wait 27 seconds", ToastOptions::with_id("rate-limit"));
        tokio::time::advance(Duration::from_millis(3000)).await;

        assert_eq!(center.visible().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_and_clear() {
        let center = make_center();
        center.error("limited", ToastOptions::with_id("rate-limit"));
        center.success("saved");

        assert!(center.dismiss(&ToastId::new("rate-limit")));
        assert!(!center.dismiss(&ToastId::new("rate-limit")));
        assert_eq!(center.visible().len(), 1);

        center.clear();
        assert!(center.visible().is_empty());
    }
}
