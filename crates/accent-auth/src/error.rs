//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User already exists.
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    /// Signup password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password too weak.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Malformed request.
    #[error("invalid request: {0}")]
    Validation(String),

    /// No user is logged in.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Insufficient permissions.
    #[error("insufficient permissions")]
    InsufficientPermissions,

    /// The identity provider did not answer in time.
    #[error("identity provider timed out after {0}ms")]
    Timeout(u64),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Check if the shopper can fix this by editing the form.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AuthError::PasswordMismatch | AuthError::WeakPassword(_) | AuthError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(!AuthError::InvalidCredentials.is_input_error());
        assert!(AuthError::PasswordMismatch.is_input_error());
        assert!(!AuthError::Timeout(10).is_input_error());
    }
}
