//! Album Console: profile management for the album catalog.
//!
//! Wires configuration, logging, the toast center, the error reporter and
//! the session context together and hands out page controllers.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use album_core::config::{AppConfig, LoggingConfig};
use album_core::error::AppError;
use album_core::result::AppResult;
use album_core::traits::AuthService;
use album_feedback::{ErrorReporter, ToastCenter};
use album_ui::dialog::DeleteConfirmModal;
use album_ui::profile::ProfilePage;
use album_ui::session::SessionContext;

pub use album_core;
pub use album_entity;
pub use album_feedback;
pub use album_ui;

/// Environment variable selecting the configuration overlay.
pub const ENV_VAR: &str = "ALBUM_ENV";

/// Overlay used when [`ENV_VAR`] is unset.
pub const DEFAULT_ENV: &str = "development";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level. Fails if a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    result.map_err(|e| AppError::configuration(format!("Failed to install subscriber: {e}")))
}

/// Shared services of the console.
#[derive(Debug)]
pub struct Console {
    config: AppConfig,
    toasts: Arc<ToastCenter>,
    reporter: ErrorReporter,
    session: Arc<SessionContext>,
}

impl Console {
    /// Build the console from a validated configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate_all()?;

        let toasts = Arc::new(ToastCenter::new(&config.toasts));
        let reporter = ErrorReporter::new(toasts.clone(), config.catalog());
        let session = Arc::new(SessionContext::new());

        tracing::info!(
            locale = ?config.messages.locale,
            max_toasts = config.toasts.max_visible,
            "Album console initialized"
        );

        Ok(Self {
            config,
            toasts,
            reporter,
            session,
        })
    }

    /// Load configuration for the environment named by [`ENV_VAR`] and
    /// build the console.
    pub fn from_env() -> AppResult<Self> {
        let env = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        tracing::info!(env = %env, "Loading configuration");
        Self::new(AppConfig::load(&env)?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Toasts currently shown by the console.
    pub fn toasts(&self) -> &Arc<ToastCenter> {
        &self.toasts
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    /// Session fed by the authentication layer.
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Profile page bound to this console's session and `service`.
    pub fn profile_page(&self, service: Arc<dyn AuthService>) -> ProfilePage {
        ProfilePage::new(
            self.session.clone(),
            service,
            self.reporter.clone(),
            self.config.display.clone(),
        )
    }

    /// Delete confirmation labelled in the configured locale.
    pub fn delete_dialog(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> DeleteConfirmModal {
        DeleteConfirmModal::new(title, description, self.reporter.catalog())
    }
}
