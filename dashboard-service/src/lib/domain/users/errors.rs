use auth::PasswordError;
use thiserror::Error;

/// Top-level error for user registration operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Storage error: {0}")]
    StorageError(String),
}
