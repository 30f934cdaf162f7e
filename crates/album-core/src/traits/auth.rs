//! Authentication service abstraction.

use async_trait::async_trait;

use crate::failure::Failure;

/// Account operations exposed by the album API for the signed-in user.
///
/// Implementations own the transport. A rejected call yields the
/// [`Failure`] exactly as received; callers normalize it for display.
#[async_trait]
pub trait AuthService: Send + Sync + 'static {
    /// Update the signed-in user's username and email.
    async fn update_profile(&self, username: &str, email: &str) -> Result<(), Failure>;

    /// Replace the signed-in user's password.
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), Failure>;
}
