use pearldecor_core::{hash_password, verify_password};

#[test]
fn test_hash_verifies_same_password_and_rejects_other() {
    let hash = hash_password("x").unwrap();

    assert!(verify_password("x", &hash).unwrap());
    assert!(!verify_password("y", &hash).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("same-password").unwrap();
    let second = hash_password("same-password").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("same-password", &first).unwrap());
    assert!(verify_password("same-password", &second).unwrap());
}

#[test]
fn test_empty_password_round_trips() {
    let hash = hash_password("").unwrap();

    assert!(verify_password("", &hash).unwrap());
    assert!(!verify_password(" ", &hash).unwrap());
}

#[test]
fn test_malformed_hash_is_internal_error() {
    let err = verify_password("x", "plaintext-not-a-hash").unwrap_err();
    assert_eq!(err.status.as_u16(), 500);
}
