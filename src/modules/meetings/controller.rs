use axum::{Json, extract::State};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateMeetingDto, MessageResponse};

use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::service::MeetingService;

/// Schedule a meeting with a client (admin only)
#[utoipa::path(
    post,
    path = "/clients/{client_id}/meetings",
    params(("client_id" = i32, Path, description = "Client ID")),
    request_body = CreateMeetingDto,
    responses(
        (status = 200, description = "Meeting scheduled", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 403, description = "Admins only", body = MessageResponse),
        (status = 404, description = "Client or employee not found", body = MessageResponse)
    ),
    tag = "Meetings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_meeting(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppPath(client_id): AppPath<i32>,
    AppJson(dto): AppJson<CreateMeetingDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    MeetingService::create_meeting(&state.db, client_id, user_id, dto).await?;
    Ok(Json(MessageResponse::new("Meeting scheduled")))
}
