//! Route layers guarding the client endpoints.
//!
//! Apply with `axum::middleware::from_fn_with_state` and `route_layer` so that
//! unmatched paths still fall through to the 404 fallback.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use pearldecor_core::AppError;
use tracing::debug;

use crate::middleware::auth::{AuthUser, authenticate};
use crate::state::AppState;

/// Requires a valid bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    debug!(user_id = %auth_user.0.sub, role = %auth_user.role(), "Authenticated request");

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

/// Requires a valid bearer token whose role claim is `admin`.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    debug!(user_id = %auth_user.0.sub, role = %auth_user.role(), "Admin route access");

    check_admin(&auth_user)?;

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

/// Rejects any caller whose role claim is not `admin`.
pub fn check_admin(auth_user: &AuthUser) -> Result<(), AppError> {
    if !auth_user.is_admin() {
        return Err(AppError::forbidden("Admins only!"));
    }

    Ok(())
}
