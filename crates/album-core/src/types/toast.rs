//! Toast notification types shared by the sink and its callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier under which a notification sink collapses repeated toasts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a toast id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Options accepted by [`NotificationSink::error`](crate::traits::NotificationSink::error).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Deduplication id. Toasts without one always stack.
    pub id: Option<ToastId>,
}

impl ToastOptions {
    /// Options deduplicated under `id`.
    pub fn with_id(id: impl Into<ToastId>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}
