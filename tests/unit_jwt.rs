use pearldecor_auth::{create_access_token, verify_token};
use pearldecor_config::JwtConfig;
use pearldecor_core::UserRole;

fn config(secret: &str, expiry: Option<i64>) -> JwtConfig {
    JwtConfig {
        secret: secret.to_string(),
        access_token_expiry: expiry,
    }
}

#[test]
fn test_token_carries_user_id_and_role() {
    let config = config("unit-test-secret-key-at-least-32-chars", Some(600));

    for (user_id, role) in [(1, UserRole::Admin), (2, UserRole::Client)] {
        let token = create_access_token(user_id, role, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.role, role);
        assert_eq!(claims.is_admin(), role == UserRole::Admin);
    }
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let issuer = config("issuer-secret-key-at-least-32-characters", None);
    let verifier = config("verifier-secret-key-at-least-32-chars", None);

    let token = create_access_token(1, UserRole::Admin, &issuer).unwrap();
    let err = verify_token(&token, &verifier).unwrap_err();

    assert_eq!(err.status.as_u16(), 401);
    assert_eq!(err.message(), "Invalid or expired token");
}

#[test]
fn test_empty_token_is_rejected() {
    let config = config("unit-test-secret-key-at-least-32-chars", None);
    assert!(verify_token("", &config).is_err());
}
