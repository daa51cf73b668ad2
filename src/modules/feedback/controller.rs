use axum::{Json, extract::State};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateFeedbackDto, FeedbackList, MessageResponse};

use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::service::FeedbackService;

/// Submit feedback for your own client record
#[utoipa::path(
    post,
    path = "/clients/{client_id}/feedback",
    params(("client_id" = i32, Path, description = "Client ID")),
    request_body = CreateFeedbackDto,
    responses(
        (status = 200, description = "Feedback submitted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "Client not found or not owned by the caller", body = MessageResponse)
    ),
    tag = "Feedback",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_feedback(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppPath(client_id): AppPath<i32>,
    AppJson(dto): AppJson<CreateFeedbackDto>,
) -> Result<Json<MessageResponse>, AppError> {
    FeedbackService::create_feedback(&state.db, &auth_user, client_id, dto).await?;
    Ok(Json(MessageResponse::new("Feedback submitted")))
}

/// List feedback recorded for a client
#[utoipa::path(
    get,
    path = "/clients/{client_id}/feedbacks",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Feedback for the client", body = FeedbackList),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "Client not found", body = MessageResponse)
    ),
    tag = "Feedback",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_feedbacks(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<i32>,
) -> Result<Json<FeedbackList>, AppError> {
    let feedbacks = FeedbackService::list_feedbacks(&state.db, client_id).await?;
    Ok(Json(feedbacks))
}
