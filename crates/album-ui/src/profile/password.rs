//! Change-password form.

use tracing::info;

use album_core::traits::AuthService;
use album_entity::user::PasswordChange;
use album_feedback::ErrorReporter;

use super::form::{FormPhase, SubmitOutcome, SubmitRejection, report_rejection};
use super::validation::validate_password_change;

/// Which password input a visibility toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    /// The password currently in use.
    Current,
    /// The replacement password.
    New,
}

/// Current, new and confirmation password inputs.
///
/// Fields are cleared only after the service accepts the change.
#[derive(Debug, Clone, Default)]
pub struct PasswordForm {
    change: PasswordChange,
    show_current: bool,
    show_new: bool,
    phase: FormPhase,
}

impl PasswordForm {
    /// Create an empty form with both passwords masked.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields as typed.
    pub fn fields(&self) -> &PasswordChange {
        &self.change
    }

    /// Edit the current password. Ignored while submitting.
    pub fn set_current(&mut self, value: impl Into<String>) -> bool {
        self.edit(|change| change.current = value.into())
    }

    /// Edit the new password. Ignored while submitting.
    pub fn set_new(&mut self, value: impl Into<String>) -> bool {
        self.edit(|change| change.new = value.into())
    }

    /// Edit the confirmation. Ignored while submitting.
    pub fn set_confirmation(&mut self, value: impl Into<String>) -> bool {
        self.edit(|change| change.confirmation = value.into())
    }

    fn edit(&mut self, apply: impl FnOnce(&mut PasswordChange)) -> bool {
        if self.is_submitting() {
            return false;
        }
        apply(&mut self.change);
        true
    }

    /// Whether `field` is shown in clear text.
    pub fn is_visible(&self, field: PasswordField) -> bool {
        match field {
            PasswordField::Current => self.show_current,
            PasswordField::New => self.show_new,
        }
    }

    /// Flip the visibility of `field`, returning the new state.
    pub fn toggle_visibility(&mut self, field: PasswordField) -> bool {
        let flag = match field {
            PasswordField::Current => &mut self.show_current,
            PasswordField::New => &mut self.show_new,
        };
        *flag = !*flag;
        *flag
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
    pub fn begin_submit(&mut self) -> Result<PasswordChange, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::Busy);
        }
        validate_password_change(&self.change).map_err(SubmitRejection::Invalid)?;

        self.phase = FormPhase::Submitting;
        Ok(self.change.clone())
    }

    /// Settle the submission. A saved change clears every field.
    pub fn complete(&mut self, saved: bool) {
        self.phase = FormPhase::Idle;
        if saved {
            self.change.clear();
        }
    }

    /// Validate, send the change and report the result.
    pub async fn submit(
        &mut self,
        service: &dyn AuthService,
        reporter: &ErrorReporter,
    ) -> SubmitOutcome {
        let change = match self.begin_submit() {
            Ok(change) => change,
            Err(rejection) => return report_rejection(reporter, rejection),
        };

        let result = service.change_password(&change.current, &change.new).await;
        self.complete(result.is_ok());

        match result {
            Ok(()) => {
                info!("Password changed");
                reporter.success(&reporter.catalog().password_changed);
                SubmitOutcome::Saved
            }
            Err(failure) => {
                let kind = failure.kind();
                reporter.notify(&failure, &reporter.catalog().password_change_failed);
                SubmitOutcome::Failed(kind)
            }
        }
    }
}
