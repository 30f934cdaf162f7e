//! Test doubles shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use album_core::config::MessageCatalog;
use album_core::failure::Failure;
use album_core::traits::{AuthService, NotificationSink};
use album_core::types::toast::ToastOptions;
use album_feedback::ErrorReporter;

mock! {
    pub Auth {}

    #[async_trait]
    impl AuthService for Auth {
        async fn update_profile(&self, username: &str, email: &str) -> Result<(), Failure>;
        async fn change_password(
            &self,
            current_password: &str,
            new_password: &str,
        ) -> Result<(), Failure>;
    }
}

/// Sink recording every toast it receives.
#[derive(Default)]
pub struct Toasts {
    pub errors: Mutex<Vec<(String, ToastOptions)>>,
    pub successes: Mutex<Vec<String>>,
}

impl Toasts {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl NotificationSink for Toasts {
    fn error(&self, message: &str, options: ToastOptions) {
        self.errors.lock().unwrap().push((message.to_string(), options));
    }

    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
}

pub fn make_reporter() -> (Arc<Toasts>, ErrorReporter) {
    let toasts = Arc::new(Toasts::default());
    let reporter = ErrorReporter::new(toasts.clone(), MessageCatalog::english());
    (toasts, reporter)
}
