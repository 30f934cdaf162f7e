//! Profile management page: account summary, username/email form and
//! change-password form.

pub mod form;
pub mod page;
pub mod password;
pub mod summary;
pub mod validation;

pub use form::{FormPhase, ProfileForm, ProfileUpdate, SubmitOutcome, SubmitRejection};
pub use page::{PageView, ProfilePage};
pub use password::{PasswordField, PasswordForm};
pub use summary::AccountSummary;
pub use validation::ValidationError;
