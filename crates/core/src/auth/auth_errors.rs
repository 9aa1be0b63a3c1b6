//! Auth-specific error types.

use thiserror::Error;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Field-level credential validation failures and sign-in errors.
///
/// The messages are the exact strings the login form renders next to the
/// offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Email is invalid")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    #[error("Invalid email or password")]
    InvalidCredentials,
}
