//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate.
//! Each sub-module represents a logical configuration section; every
//! section has defaults so the console starts without any file present.

pub mod display;
pub mod logging;
pub mod messages;
pub mod toasts;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::display::DisplayConfig;
pub use self::logging::LoggingConfig;
pub use self::messages::{Locale, MessageCatalog, MessagesConfig};
pub use self::toasts::ToastConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration files
/// (`config/default` + environment overlay) and `ALBUM__*` variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// User-facing message localization.
    pub messages: MessagesConfig,
    /// Account information formatting.
    pub display: DisplayConfig,
    /// Toast notification behaviour.
    #[validate(nested)]
    pub toasts: ToastConfig,
}

impl AppConfig {
    /// Load configuration from files and the environment.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `ALBUM__`, then validates the
    /// result.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ALBUM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app_config.validate_all()?;
        Ok(app_config)
    }

    /// Validate every section that carries constraints.
    pub fn validate_all(&self) -> Result<(), AppError> {
        self.validate()?;
        Ok(())
    }

    /// The message catalog selected by `messages.locale`.
    pub fn catalog(&self) -> MessageCatalog {
        self.messages.catalog()
    }
}
