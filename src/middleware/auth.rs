use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use pearldecor_auth::{Claims, verify_token};
use pearldecor_config::JwtConfig;
use pearldecor_core::{AppError, UserRole};

use crate::state::AppState;

/// Extractor providing the authenticated user's claims.
///
/// Behind [`require_auth`](crate::middleware::role::require_auth) or
/// [`require_admin`](crate::middleware::role::require_admin) the claims are
/// taken from request extensions; otherwise the bearer token is verified here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID
    pub fn user_id(&self) -> Result<i32, AppError> {
        self.0.user_id()
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}

/// Resolves the caller from the `Authorization` header.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

    let claims = verify_token(token, jwt_config)?;

    Ok(AuthUser(claims))
}
