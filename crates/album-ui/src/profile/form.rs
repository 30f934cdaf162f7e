//! Edit form for username and email.

use tracing::{debug, info};

use album_core::error::ErrorKind;
use album_core::traits::AuthService;
use album_entity::user::UserProfile;
use album_feedback::ErrorReporter;

use super::validation::{ValidationError, validate_profile};

/// Submission state of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Editable; submit enabled.
    #[default]
    Idle,
    /// Waiting on the service; inputs and submit disabled.
    Submitting,
}

/// Why a submit never reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already in flight.
    Busy,
    /// Local validation failed.
    Invalid(ValidationError),
}

/// Result of a submit attempt. Submits never return errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service accepted the change.
    Saved,
    /// The service rejected the change; the failure was reported.
    Failed(ErrorKind),
    /// The submit was refused locally.
    Rejected(SubmitRejection),
}

impl SubmitOutcome {
    /// Whether the change was saved.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Trimmed values sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New username.
    pub username: String,
    /// New email.
    pub email: String,
}

/// Report a local rejection. Busy rejections are silent.
pub(crate) fn report_rejection(
    reporter: &ErrorReporter,
    rejection: SubmitRejection,
) -> SubmitOutcome {
    match rejection {
        SubmitRejection::Busy => debug!("Submit ignored while a request is in flight"),
        SubmitRejection::Invalid(err) => {
            debug!(reason = %err, "Form rejected by local validation");
            reporter.error(err.message(reporter.catalog()));
        }
    }
    SubmitOutcome::Rejected(rejection)
}

/// Editable copy of the user's username and email.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    username: String,
    email: String,
    phase: FormPhase,
}

impl ProfileForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the fields from a profile snapshot, discarding local edits.
    pub fn seed(&mut self, user: &UserProfile) {
        self.username = user.username.clone();
        self.email = user.email.clone();
    }

    /// Username as typed.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Email as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Edit the username. Ignored while submitting; returns whether applied.
    pub fn set_username(&mut self, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.username = value.into();
        true
    }

    /// Edit the email. Ignored while submitting; returns whether applied.
    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.email = value.into();
        true
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Validate and enter `Submitting`, returning the request to send.
    pub fn begin_submit(&mut self) -> Result<ProfileUpdate, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::Busy);
        }
        validate_profile(&self.username, &self.email).map_err(SubmitRejection::Invalid)?;

        self.phase = FormPhase::Submitting;
        Ok(ProfileUpdate {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }

    /// Settle the submission and return to `Idle`.
    pub fn complete(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// Validate, send the update and report the result.
    ///
    /// On success the fields keep the values as typed. On failure they are
    /// left untouched and the failure is reported with the profile fallback.
    pub async fn submit(
        &mut self,
        service: &dyn AuthService,
        reporter: &ErrorReporter,
    ) -> SubmitOutcome {
        let update = match self.begin_submit() {
            Ok(update) => update,
            Err(rejection) => return report_rejection(reporter, rejection),
        };

        let result = service.update_profile(&update.username, &update.email).await;
        self.complete();

        match result {
            Ok(()) => {
                info!(username = %update.username, "Profile updated");
                reporter.success(&reporter.catalog().profile_updated);
                SubmitOutcome::Saved
            }
            Err(failure) => {
                let kind = failure.kind();
                reporter.notify(&failure, &reporter.catalog().profile_update_failed);
                SubmitOutcome::Failed(kind)
            }
        }
    }
}
