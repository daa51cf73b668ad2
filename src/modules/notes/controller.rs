use axum::{Json, extract::State};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateNoteDto, MessageResponse, NoteList};

use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::service::NoteService;

/// Add a note to a client (admin only)
#[utoipa::path(
    post,
    path = "/clients/{client_id}/add_note",
    params(("client_id" = i32, Path, description = "Client ID")),
    request_body = CreateNoteDto,
    responses(
        (status = 200, description = "Note added", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 403, description = "Admins only", body = MessageResponse),
        (status = 404, description = "Client not found", body = MessageResponse)
    ),
    tag = "Notes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn add_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppPath(client_id): AppPath<i32>,
    AppJson(dto): AppJson<CreateNoteDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let employee_id = auth_user.user_id()?;
    NoteService::add_note(&state.db, client_id, employee_id, dto).await?;
    Ok(Json(MessageResponse::new("Note added to client")))
}

/// List a client's notes
#[utoipa::path(
    get,
    path = "/clients/{client_id}/notes",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Notes for the client", body = NoteList),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 404, description = "Client not found", body = MessageResponse)
    ),
    tag = "Notes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_notes(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<i32>,
) -> Result<Json<NoteList>, AppError> {
    let notes = NoteService::list_notes(&state.db, client_id).await?;
    Ok(Json(notes))
}
