//! # album-ui
//!
//! Presentation controllers for the album console: the profile page with
//! its two forms, the session context that feeds it, and dialog state.

pub mod dialog;
pub mod profile;
pub mod session;

#[cfg(test)]
mod test_support;

pub use dialog::{ConfirmOutcome, DeleteConfirmModal, Modal};
pub use profile::{
    AccountSummary, FormPhase, PageView, PasswordForm, ProfileForm, ProfilePage, SubmitOutcome,
    SubmitRejection, ValidationError,
};
pub use session::{AuthContext, SessionContext};
