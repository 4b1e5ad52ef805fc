// libs/auth-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_models::auth::User;
use shared_models::error::AppError;

pub const ADMIN_USER_ID: &str = "1";
pub const ADMIN_USER_NAME: &str = "Admin User";
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

/// The only account the dashboard knows about.
pub fn admin_user(email: &str) -> User {
    User {
        id: ADMIN_USER_ID.to_string(),
        name: ADMIN_USER_NAME.to_string(),
        email: email.to_string(),
        role: ADMIN_ROLE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session storage error: {0}")]
    StorageError(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            err @ AuthError::MissingCredentials => AppError::ValidationError(err.to_string()),
            err @ AuthError::InvalidCredentials => AppError::Auth(err.to_string()),
            AuthError::StorageError(msg) => AppError::Storage(msg),
        }
    }
}
