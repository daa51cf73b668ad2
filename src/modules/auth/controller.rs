use axum::{Json, extract::State};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use crate::extract::AppJson;
use crate::state::AppState;

use super::service::AuthService;

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Malformed body or unknown role", body = MessageResponse),
        (status = 409, description = "Username already taken", body = MessageResponse),
        (status = 500, description = "User details could not be created", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(dto): AppJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::register_user(&state.db, dto).await?;
    Ok(Json(MessageResponse::new("New user registered!")))
}

/// Login and receive an access token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn login_user(
    State(state): State<AppState>,
    AppJson(dto): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
