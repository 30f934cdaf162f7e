//! Profile management page controller.

use std::sync::Arc;

use album_core::config::DisplayConfig;
use album_core::traits::AuthService;
use album_entity::user::UserProfile;
use album_feedback::ErrorReporter;

use super::form::{ProfileForm, SubmitOutcome};
use super::password::PasswordForm;
use super::summary::AccountSummary;
use crate::session::AuthContext;

/// What the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// No profile yet.
    Loading { message: String },
    /// Account details; the forms are available through the page.
    Ready(AccountSummary),
}

/// Owns the two forms of the profile page and keeps the edit copy in sync
/// with the session snapshot.
pub struct ProfilePage {
    context: Arc<dyn AuthContext>,
    service: Arc<dyn AuthService>,
    reporter: ErrorReporter,
    display: DisplayConfig,
    /// Snapshot the profile form was last seeded from.
    last_seen: Option<UserProfile>,
    profile_form: ProfileForm,
    password_form: PasswordForm,
}

impl std::fmt::Debug for ProfilePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilePage")
            .field("last_seen", &self.last_seen)
            .field("profile_form", &self.profile_form)
            .finish_non_exhaustive()
    }
}

impl ProfilePage {
    /// Create the page and seed the profile form if a user is already loaded.
    pub fn new(
        context: Arc<dyn AuthContext>,
        service: Arc<dyn AuthService>,
        reporter: ErrorReporter,
        display: DisplayConfig,
    ) -> Self {
        let mut page = Self {
            context,
            service,
            reporter,
            display,
            last_seen: None,
            profile_form: ProfileForm::new(),
            password_form: PasswordForm::new(),
        };
        page.refresh();
        page
    }

    /// Re-read the snapshot. A changed snapshot overwrites local edits of
    /// the profile form. Returns whether the form was re-seeded.
    pub fn refresh(&mut self) -> bool {
        let current = self.context.current_user();
        if current == self.last_seen {
            return false;
        }

        self.last_seen = current;
        match &self.last_seen {
            Some(user) => {
                tracing::debug!(user_id = user.id, "Profile form re-seeded from session");
                self.profile_form.seed(user);
                true
            }
            None => false,
        }
    }

    /// Current view of the page.
    pub fn view(&self) -> PageView {
        match self.context.current_user() {
            Some(user) => PageView::Ready(AccountSummary::from_profile(
                &user,
                &self.display,
                self.reporter.catalog(),
            )),
            None => PageView::Loading {
                message: self.reporter.catalog().loading_profile.clone(),
            },
        }
    }

    pub fn profile_form(&self) -> &ProfileForm {
        &self.profile_form
    }

    pub fn profile_form_mut(&mut self) -> &mut ProfileForm {
        &mut self.profile_form
    }

    pub fn password_form(&self) -> &PasswordForm {
        &self.password_form
    }

    pub fn password_form_mut(&mut self) -> &mut PasswordForm {
        &mut self.password_form
    }

    /// Submit the username/email form.
    pub async fn submit_profile(&mut self) -> SubmitOutcome {
        self.profile_form
            .submit(self.service.as_ref(), &self.reporter)
            .await
    }

    /// Submit the change-password form.
    pub async fn submit_password(&mut self) -> SubmitOutcome {
        self.password_form
            .submit(self.service.as_ref(), &self.reporter)
            .await
    }
}
