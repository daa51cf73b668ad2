use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use pearldecor_core::UserRole;
use pearldecor_models::{
    ClientProfile, ClientReport, ContractSummary, CreateContractDto, CreateFeedbackDto,
    CreateMeetingDto, CreateNoteDto, FeedbackEntry, FeedbackList, FeedbackSummary, LoginRequest,
    LoginResponse, MeetingSummary, MessageResponse, NoteEntry, NoteList, RegisterRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::notes::controller::add_note,
        crate::modules::notes::controller::get_notes,
        crate::modules::reports::controller::get_client_report,
        crate::modules::feedback::controller::create_feedback,
        crate::modules::feedback::controller::get_feedbacks,
        crate::modules::contracts::controller::create_contract,
        crate::modules::meetings::controller::create_meeting,
    ),
    components(
        schemas(
            UserRole,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            CreateNoteDto,
            NoteEntry,
            NoteList,
            CreateFeedbackDto,
            FeedbackEntry,
            FeedbackList,
            FeedbackSummary,
            CreateContractDto,
            ContractSummary,
            CreateMeetingDto,
            MeetingSummary,
            ClientProfile,
            ClientReport,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Notes", description = "Notes admins keep on clients"),
        (name = "Feedback", description = "Client feedback"),
        (name = "Contracts", description = "Client contracts"),
        (name = "Meetings", description = "Meetings with clients"),
        (name = "Reports", description = "Per-client reports")
    ),
    info(
        title = "Pearl Decor API",
        version = "0.1.0",
        description = "Client management backend for Pearl Decor with JWT authentication and client/admin roles.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_client_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/register",
            "/login",
            "/clients/{client_id}/add_note",
            "/clients/{client_id}/notes",
            "/clients/{client_id}/report",
            "/clients/{client_id}/feedback",
            "/clients/{client_id}/feedbacks",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn test_openapi_has_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
