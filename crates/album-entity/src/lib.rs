//! # album-entity
//!
//! Domain entities consumed by the album console: the signed-in user's
//! profile snapshot, roles, and the password change request.

pub mod user;

pub use user::{PasswordChange, Role, UserProfile};
