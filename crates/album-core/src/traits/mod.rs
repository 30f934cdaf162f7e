//! Collaborator traits defined in `album-core` and implemented elsewhere.

pub mod auth;
pub mod notifier;

pub use auth::AuthService;
pub use notifier::NotificationSink;
