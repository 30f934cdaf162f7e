//! Local validation of the profile and password forms.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use album_core::config::MessageCatalog;
use album_entity::user::PasswordChange;

/// Minimum username length, in characters.
pub const USERNAME_MIN_CHARS: usize = 3;

/// Maximum username length, in characters.
pub const USERNAME_MAX_CHARS: usize = 50;

/// Minimum length of a new password, in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Why a form was rejected before reaching the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("all fields are required")]
    MissingFields,
    /// Username length outside the accepted range.
    #[error("username must be between {USERNAME_MIN_CHARS} and {USERNAME_MAX_CHARS} characters")]
    UsernameLength,
    /// Email is not shaped like `local@domain.tld`.
    #[error("invalid email address")]
    InvalidEmail,
    /// New password shorter than [`PASSWORD_MIN_CHARS`].
    #[error("new password must be at least {PASSWORD_MIN_CHARS} characters")]
    PasswordTooShort,
    /// New password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Localized message shown to the user.
    pub fn message<'a>(&self, catalog: &'a MessageCatalog) -> &'a str {
        match self {
            Self::MissingFields => &catalog.fill_all_fields,
            Self::UsernameLength => &catalog.username_length,
            Self::InvalidEmail => &catalog.invalid_email,
            Self::PasswordTooShort => &catalog.password_too_short,
            Self::PasswordMismatch => &catalog.passwords_mismatch,
        }
    }
}

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate the profile form. Checks run in order; the first failure wins.
pub fn validate_profile(username: &str, email: &str) -> Result<(), ValidationError> {
    let username = username.trim();
    let email = email.trim();

    if username.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let length = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::UsernameLength);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate the password form. Checks run in order; the first failure wins.
pub fn validate_password_change(change: &PasswordChange) -> Result<(), ValidationError> {
    if change.current.is_empty() || change.new.is_empty() || change.confirmation.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if change.new.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    if change.new != change.confirmation {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}
