use anyhow::anyhow;
use pearldecor_core::AppError;
use pearldecor_models::ClientDetails;

use crate::middleware::auth::AuthUser;

/// Whether the client record belongs to the authenticated user.
pub fn owns_client(auth_user: &AuthUser, client: &ClientDetails) -> bool {
    auth_user
        .user_id()
        .is_ok_and(|user_id| user_id == client.user_id)
}

/// Resolves a looked-up client for a write by its owner.
///
/// A missing client and someone else's client produce the same 404 so that
/// callers cannot probe which client ids exist.
pub fn ensure_owns_client(
    auth_user: &AuthUser,
    client: Option<ClientDetails>,
) -> Result<ClientDetails, AppError> {
    match client {
        Some(client) if owns_client(auth_user, &client) => Ok(client),
        _ => Err(AppError::not_found(anyhow!(
            "Client not found or unauthorized"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pearldecor_auth::Claims;
    use pearldecor_core::UserRole;

    fn auth_user(sub: &str) -> AuthUser {
        AuthUser(Claims {
            sub: sub.to_string(),
            role: UserRole::Client,
            iat: 1_700_000_000,
            exp: None,
        })
    }

    fn client_owned_by(user_id: i32) -> ClientDetails {
        let now = Utc::now();
        ClientDetails {
            id: 5,
            user_id,
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            phone: String::new(),
            address: String::new(),
            initial_contact: String::new(),
            point_of_contact: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_owns_client() {
        assert!(owns_client(&auth_user("7"), &client_owned_by(7)));
        assert!(!owns_client(&auth_user("8"), &client_owned_by(7)));
    }

    #[test]
    fn test_owns_client_rejects_malformed_subject() {
        assert!(!owns_client(&auth_user("seven"), &client_owned_by(7)));
    }

    #[test]
    fn test_ensure_owns_client_missing_and_foreign_look_the_same() {
        let missing = ensure_owns_client(&auth_user("7"), None).unwrap_err();
        let foreign = ensure_owns_client(&auth_user("8"), Some(client_owned_by(7))).unwrap_err();

        assert_eq!(missing.status.as_u16(), 404);
        assert_eq!(foreign.status.as_u16(), 404);
        assert_eq!(missing.message(), foreign.message());
    }

    #[test]
    fn test_ensure_owns_client_returns_record() {
        let client = ensure_owns_client(&auth_user("7"), Some(client_owned_by(7))).unwrap();
        assert_eq!(client.id, 5);
    }
}
