use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::{require_admin, require_auth};
use crate::modules::contracts::controller::create_contract;
use crate::modules::feedback::controller::{create_feedback, get_feedbacks};
use crate::modules::meetings::controller::create_meeting;
use crate::modules::notes::controller::{add_note, get_notes};
use crate::modules::reports::controller::get_client_report;
use crate::state::AppState;

/// Routes nested under `/clients`.
pub fn init_clients_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{client_id}/add_note", post(add_note))
        .route("/{client_id}/report", get(get_client_report))
        .route("/{client_id}/contracts", post(create_contract))
        .route("/{client_id}/meetings", post(create_meeting))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let member_routes = Router::new()
        .route("/{client_id}/notes", get(get_notes))
        .route("/{client_id}/feedback", post(create_feedback))
        .route("/{client_id}/feedbacks", get(get_feedbacks))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new().merge(admin_routes).merge(member_routes)
}
