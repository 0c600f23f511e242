//! `SeaORM` implementation of the `AuthService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::Store;
use crate::services::auth_service::{AuthError, AuthService, LoginResult, UserInfo};
use crate::services::password::{PasswordError, PasswordService};
use crate::services::token::TokenService;

const DEFAULT_ROLE: &str = "User";

pub struct SeaOrmAuthService {
    store: Store,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(
        store: Store,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            passwords,
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(&self, username: &str, password: &str) -> Result<UserInfo, AuthError> {
        if self.store.user_exists(username).await? {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self.passwords.hash(password).await.map_err(|e| match e {
            PasswordError::EmptyPassword => AuthError::Validation(e.to_string()),
            other => AuthError::Internal(other.to_string()),
        })?;

        let user = self
            .store
            .create_user(username, &password_hash, DEFAULT_ROLE)
            .await?;

        info!("User {} registered successfully", user.username);
        Ok(UserInfo::from(user))
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError> {
        let Some((user, password_hash)) = self.store.get_user_with_hash(username).await? else {
            warn!("Login attempt with non-existent username: {username}");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.passwords.verify(password, &password_hash).await {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self
            .tokens
            .create_access_token(&user)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        info!("User {} logged in successfully", user.username);

        Ok(LoginResult {
            access_token: issued.token,
            expires_at: issued.expires_at,
            user: UserInfo::from(user),
        })
    }

    async fn current_user(&self, user_id: i32) -> Result<UserInfo, AuthError> {
        let user = self
            .store
            .get_user_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(UserInfo::from(user))
    }
}
