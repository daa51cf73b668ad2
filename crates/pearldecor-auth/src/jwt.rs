//! Token issuing and verification.
//!
//! Whether a token expires is decided by [`JwtConfig::access_token_expiry`].
//! With no expiry configured the `exp` claim is omitted and verification does
//! not require it; a token that does carry `exp` is always checked against it.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use pearldecor_config::JwtConfig;
use pearldecor_core::{AppError, UserRole};

use crate::claims::Claims;

/// Creates a signed access token embedding the user's id and role.
///
/// # Errors
///
/// Returns an internal error if the configured expiry does not fit in a
/// timestamp or if encoding fails.
pub fn create_access_token(
    user_id: i32,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = jwt_config
        .access_token_expiry
        .map(|secs| {
            now.checked_add(secs)
                .and_then(|exp| usize::try_from(exp).ok())
                .ok_or_else(|| AppError::internal(anyhow::anyhow!("Token expiry out of range")))
        })
        .transpose()?;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now as usize,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token's signature (and expiry, if it has one) and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = true;
    validation
}
