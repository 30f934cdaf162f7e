//! User profile snapshot and password change request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// The signed-in user as last reported by the album API.
///
/// Owned by the authentication context. Forms keep their own edit copies
/// and never write back into a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Numeric user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Granted authorities.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Whether the account is active.
    #[serde(rename = "ativo", alias = "active", default)]
    pub active: bool,
    /// When the account was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last successful login time.
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(Role::is_admin)
    }
}

/// Fields of the change-password form.
///
/// Transient: cleared after a successful change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    /// The password currently in use.
    pub current: String,
    /// The replacement password.
    pub new: String,
    /// Repetition of the replacement password.
    pub confirmation: String,
}

impl PasswordChange {
    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.new.is_empty() && self.confirmation.is_empty()
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        self.current.clear();
        self.new.clear();
        self.confirmation.clear();
    }
}
