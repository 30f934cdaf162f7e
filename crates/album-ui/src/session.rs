//! Signed-in user session.

use std::sync::Arc;

use tokio::sync::watch;

use album_entity::user::UserProfile;

/// Source of the signed-in user's profile snapshot.
///
/// `None` means the profile is still loading.
pub trait AuthContext: Send + Sync {
    /// The current profile snapshot, if loaded.
    fn current_user(&self) -> Option<UserProfile>;
}

impl<T: AuthContext + ?Sized> AuthContext for Arc<T> {
    fn current_user(&self) -> Option<UserProfile> {
        (**self).current_user()
    }
}

/// Session state shared between the authentication layer and the pages.
///
/// Backed by a watch channel so pages can await profile changes.
#[derive(Debug)]
pub struct SessionContext {
    /// Latest snapshot.
    user: watch::Sender<Option<UserProfile>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// Create a session with no user loaded.
    pub fn new() -> Self {
        let (user, _) = watch::channel(None);
        Self { user }
    }

    /// Replace the snapshot. `None` puts the session back into loading.
    pub fn set_user(&self, user: Option<UserProfile>) {
        let username = user.as_ref().map(|u| u.username.clone());
        self.user.send_replace(user);
        tracing::debug!(username = ?username, "Session user updated");
    }

    /// Receiver notified whenever the snapshot is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.user.subscribe()
    }
}

impl AuthContext for SessionContext {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }
}
