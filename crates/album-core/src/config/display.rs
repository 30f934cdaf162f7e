//! Account information display settings.

use serde::{Deserialize, Serialize};

/// How account details are rendered on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// `chrono` format string used for creation and last-login timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Prefix stripped from role names before display.
    #[serde(default = "default_role_prefix")]
    pub role_prefix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            role_prefix: default_role_prefix(),
        }
    }
}

fn default_date_format() -> String {
    "%d/%m/%Y %H:%M:%S".to_string()
}

fn default_role_prefix() -> String {
    "ROLE_".to_string()
}
