//! JWT access token issuance and validation (HS256).
//!
//! A token and its expiry are produced by a single call so callers never
//! depend on issuing order.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::JwtConfig;
use crate::db::User;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expiry out of representable range")]
    ExpiryOverflow,

    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Username
    pub name: String,
    pub role: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Numeric user id carried in the subject claim.
    #[must_use]
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

/// A signed access token together with its expiry instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Builds a signed bearer token for the user with subject, name and role
    /// claims; not-before is now and expiry is now + configured TTL.
    pub fn create_access_token(&self, user: &User) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(Duration::minutes(self.config.expire_minutes))
            .ok_or(TokenError::ExpiryOverflow)?;

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.username.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validates signature, lifetime, not-before and (when configured) issuer
    /// and audience, with zero clock-skew tolerance.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;

        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }

        if let Some(audience) = &self.config.audience {
            validation.set_audience(&[audience]);
        } else {
            validation.validate_aud = false;
        }

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: 42,
            username: "alice".to_string(),
            role: "User".to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    fn config(key: &str) -> JwtConfig {
        JwtConfig {
            key: key.to_string(),
            issuer: Some("trainme".to_string()),
            audience: Some("trainme-client".to_string()),
            expire_minutes: 30,
        }
    }

    #[test]
    fn issues_and_decodes_tokens() {
        let svc = TokenService::new(config("test-signing-key"));
        let issued = svc.create_access_token(&test_user()).unwrap();

        let claims = svc.decode_access_token(&issued.token).unwrap();
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.role, "User");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn expiry_matches_configured_ttl() {
        let svc = TokenService::new(config("test-signing-key"));
        let before = Utc::now() + Duration::minutes(30) - Duration::seconds(5);
        let issued = svc.create_access_token(&test_user()).unwrap();
        let after = Utc::now() + Duration::minutes(30) + Duration::seconds(5);

        assert!(issued.expires_at > before);
        assert!(issued.expires_at < after);
    }

    #[test]
    fn rejects_tokens_signed_with_other_key() {
        let issuer = TokenService::new(config("key-one"));
        let verifier = TokenService::new(config("key-two"));

        let issued = issuer.create_access_token(&test_user()).unwrap();
        assert!(verifier.decode_access_token(&issued.token).is_err());
    }

    #[test]
    fn rejects_wrong_issuer() {
        let issuer = TokenService::new(JwtConfig {
            issuer: Some("someone-else".to_string()),
            ..config("shared-key")
        });
        let verifier = TokenService::new(config("shared-key"));

        let issued = issuer.create_access_token(&test_user()).unwrap();
        assert!(verifier.decode_access_token(&issued.token).is_err());
    }
}
