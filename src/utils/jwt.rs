use std::fmt;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Why a token failed verification. The gate collapses all three to the same
/// user-visible outcome; the distinction exists for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    Malformed,
    BadSignature,
    Expired,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            VerifyError::Malformed => "malformed",
            VerifyError::BadSignature => "bad-signature",
            VerifyError::Expired => "expired",
        };
        f.write_str(reason)
    }
}

/// The identity resolved from a verified credential. Exists for the duration
/// of one request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

pub fn create_access_token(
    user_id: Uuid,
    username: &str,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role: role.as_str().to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verify signature and expiry, then decode the embedded principal.
///
/// Pure: no side effects, no credential-store access. Decoding fails closed:
/// a `sub` that is not a UUID or a role outside the closed set is treated as
/// a malformed token, never silently defaulted.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Principal, VerifyError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => VerifyError::Expired,
        ErrorKind::InvalidSignature => VerifyError::BadSignature,
        _ => VerifyError::Malformed,
    })?;

    let id = Uuid::parse_str(&data.claims.sub).map_err(|_| VerifyError::Malformed)?;
    let role = data
        .claims
        .role
        .parse::<UserRole>()
        .map_err(|_| VerifyError::Malformed)?;

    Ok(Principal {
        id,
        username: data.claims.username,
        role,
    })
}
