//! JWT claim structure for access tokens.

use pearldecor_core::{AppError, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: User ID (subject), the `users.id` primary key as a string
/// - `role`: The user's role at login time
/// - `iat`: Token issued-at timestamp
/// - `exp`: Expiration timestamp, absent when token expiry is disabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Role of the authenticated user
    pub role: UserRole,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Token expiration timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl Claims {
    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> Result<i32, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, role: UserRole, exp: Option<usize>) -> Claims {
        Claims {
            sub: sub.to_string(),
            role,
            iat: 1234567800,
            exp,
        }
    }

    #[test]
    fn test_claims_serialize_without_exp() {
        let serialized = serde_json::to_string(&claims("7", UserRole::Client, None)).unwrap();
        assert!(serialized.contains(r#""sub":"7""#));
        assert!(serialized.contains(r#""role":"client""#));
        assert!(!serialized.contains("exp"));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"12","role":"admin","iat":9999999900,"exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.user_id().unwrap(), 12);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp, Some(9999999999));
    }

    #[test]
    fn test_user_id_rejects_non_numeric_subject() {
        let claims = claims("not-a-number", UserRole::Client, None);
        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_is_admin() {
        assert!(claims("1", UserRole::Admin, None).is_admin());
        assert!(!claims("1", UserRole::Client, None).is_admin());
    }
}
