use axum::{Json, extract::State};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateContractDto, MessageResponse};

use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::service::ContractService;

/// Create a contract for a client (admin only)
#[utoipa::path(
    post,
    path = "/clients/{client_id}/contracts",
    params(("client_id" = i32, Path, description = "Client ID")),
    request_body = CreateContractDto,
    responses(
        (status = 200, description = "Contract created", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 403, description = "Admins only", body = MessageResponse),
        (status = 404, description = "Client not found", body = MessageResponse)
    ),
    tag = "Contracts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_contract(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppPath(client_id): AppPath<i32>,
    AppJson(dto): AppJson<CreateContractDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    ContractService::create_contract(&state.db, client_id, user_id, dto).await?;
    Ok(Json(MessageResponse::new("Contract created")))
}
