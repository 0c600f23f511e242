//! Domain service for registration, login and current-user lookup.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::db::User;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,

    /// Covers both unknown username and wrong password so responses carry no
    /// user-enumeration signal.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Public user fields; never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i32,
    pub user_name: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Successful login: bearer token, its expiry and the user's public info.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserInfo,
}

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Creates a new account with the default "User" role.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UsernameTaken`] if the username is already
    /// registered (case-sensitive exact match).
    async fn register(&self, username: &str, password: &str) -> Result<UserInfo, AuthError>;

    /// Verifies credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for unknown usernames and
    /// wrong passwords alike.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Looks up the public fields of an existing user.
    async fn current_user(&self, user_id: i32) -> Result<UserInfo, AuthError>;
}
