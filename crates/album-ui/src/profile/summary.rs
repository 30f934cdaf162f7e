//! Read-only account information.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use album_core::config::{DisplayConfig, MessageCatalog};
use album_entity::user::UserProfile;

/// Shown in place of a missing value.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Avatar letter used when the username is empty.
pub const DEFAULT_INITIAL: char = 'U';

/// Account details formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Avatar letter.
    pub initial: char,
    pub active: bool,
    /// "Active account" or "Inactive".
    pub status_label: String,
    /// Present only for administrators.
    pub admin_badge: Option<String>,
    /// Roles without the configured prefix, comma separated.
    pub roles: String,
    pub created_at: String,
    pub last_login: String,
}

impl AccountSummary {
    /// Format `user` with the given display settings and catalog.
    pub fn from_profile(
        user: &UserProfile,
        display: &DisplayConfig,
        catalog: &MessageCatalog,
    ) -> Self {
        let initial = user
            .username
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or(DEFAULT_INITIAL);

        let status_label = if user.active {
            catalog.account_active.clone()
        } else {
            catalog.account_inactive.clone()
        };

        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            initial,
            active: user.active,
            status_label,
            admin_badge: user.is_admin().then(|| catalog.administrator.clone()),
            roles: format_roles(user, &display.role_prefix),
            created_at: format_timestamp(user.created_at, &display.date_format),
            last_login: format_timestamp(user.last_login, &display.date_format),
        }
    }
}

fn format_roles(user: &UserProfile, prefix: &str) -> String {
    if user.roles.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    user.roles
        .iter()
        .map(|role| role.label(prefix))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format `at` in UTC with `format`; RFC 3339 if the format is invalid.
fn format_timestamp(at: Option<DateTime<Utc>>, format: &str) -> String {
    let Some(at) = at else {
        return EMPTY_PLACEHOLDER.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", at.format(format)) {
        Ok(()) => out,
        Err(_) => {
            tracing::debug!(format, "Invalid date format; using RFC 3339");
            at.to_rfc3339()
        }
    }
}
