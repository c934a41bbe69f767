//! Error types for authentication, token, and validation failures
//!
//! Every variant maps to a stable machine-readable code via
//! [`ErrorResponse`]; messages stay human-readable and never expose
//! internal detail.

use thiserror::Error;
use tm_shared::types::response::ErrorResponse;

/// Authentication-related errors
///
/// Credential failures are reported uniformly: a caller cannot tell an
/// unknown email from a wrong password through `InvalidCredentials`.
/// The password-reset request path is the deliberate exception: it
/// reveals whether an email is registered.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Email not found")]
    UserNotFound,

    #[error("Invalid reset token")]
    ResetTokenInvalid,

    #[error("Expired reset token")]
    ResetTokenExpired,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::ResetTokenInvalid => "RESET_TOKEN_INVALID",
            AuthError::ResetTokenExpired => "RESET_TOKEN_EXPIRED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::PasswordMismatch => "PASSWORD_MISMATCH",
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
