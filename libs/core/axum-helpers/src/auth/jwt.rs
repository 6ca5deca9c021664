use super::config::JwtConfig;
use crate::errors::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
}

/// Token verification failure, keeping expiry distinct from every other
/// kind of invalid token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Failed to sign token")]
    Signing,
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Expired | AuthError::Invalid => AppError::Unauthorized(e.to_string()),
            AuthError::Signing => AppError::InternalServerError(e.to_string()),
        }
    }
}

/// Stateless HS256 JWT issuance and verification.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    expire_minutes: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expire_minutes: config.expire_minutes,
        }
    }

    /// Issue an access token for the given user.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::minutes(self.expire_minutes)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|_| AuthError::Signing)
    }

    /// Verify the token signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<JwtClaims, AuthError> {
        decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid,
        })
    }

    /// Verify the token and parse its subject as a user ID.
    pub fn verify_subject(&self, token: &str) -> Result<Uuid, AuthError> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::Invalid)
    }
}
