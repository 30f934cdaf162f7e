//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles granted by the album API.
///
/// The API sends roles as Spring authority names (`ROLE_ADMIN`, `ROLE_USER`);
/// unknown authorities are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Administrator of the catalog.
    Admin,
    /// Regular signed-in user.
    User,
    /// Any other authority.
    Other(String),
}

impl Role {
    /// Authority name as sent by the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::User => "ROLE_USER",
            Self::Other(name) => name,
        }
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Authority name without `prefix`, for display.
    pub fn label<'a>(&'a self, prefix: &str) -> &'a str {
        let name = self.as_str();
        name.strip_prefix(prefix).unwrap_or(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "ROLE_ADMIN" => Self::Admin,
            "ROLE_USER" => Self::User,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}
