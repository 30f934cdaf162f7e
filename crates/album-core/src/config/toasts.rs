//! Toast notification settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Behaviour of the in-memory toast center.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays visible, in milliseconds.
    #[serde(default = "default_duration_ms")]
    #[validate(range(min = 500, max = 60000))]
    pub duration_ms: u64,
    /// Maximum number of toasts visible at once; the oldest are evicted.
    #[serde(default = "default_max_visible")]
    #[validate(range(min = 1, max = 20))]
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            max_visible: default_max_visible(),
        }
    }
}

fn default_duration_ms() -> u64 {
    4000
}

fn default_max_visible() -> usize {
    5
}
