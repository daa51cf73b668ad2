use axum::{Json, extract::State};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{ClientReport, MessageResponse};

use crate::extract::AppPath;
use crate::state::AppState;

use super::service::ReportService;

/// Full report on a client (admin only)
#[utoipa::path(
    get,
    path = "/clients/{client_id}/report",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client profile with contracts, feedback, meetings and notes", body = ClientReport),
        (status = 401, description = "Unauthorized", body = MessageResponse),
        (status = 403, description = "Admins only", body = MessageResponse),
        (status = 404, description = "Client not found", body = MessageResponse)
    ),
    tag = "Reports",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_client_report(
    State(state): State<AppState>,
    AppPath(client_id): AppPath<i32>,
) -> Result<Json<ClientReport>, AppError> {
    let report = ReportService::client_report(&state.db, client_id).await?;
    Ok(Json(report))
}
