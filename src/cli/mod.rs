//! Administrative commands run from `pearldecor-cli`.

use pearldecor_core::{AppError, UserRole};
use pearldecor_db::{PgPool, run_migrations};
use pearldecor_models::{RegisterRequest, User};

use crate::modules::auth::service::AuthService;

/// Registers an admin account together with its employee record.
///
/// Goes through the same path as `POST /register`, so a taken username fails
/// with the same conflict error.
pub async fn create_admin(
    db: &PgPool,
    username: &str,
    password: &str,
    name: &str,
    permissions: Option<String>,
) -> Result<User, AppError> {
    let dto = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        role: UserRole::Admin,
        name: Some(name.to_string()),
        email: None,
        phone: None,
        address: None,
        initial_contact: None,
        point_of_contact: None,
        permissions,
    };

    AuthService::register_user(db, dto).await
}

/// Applies any pending embedded migrations.
pub async fn migrate(db: &PgPool) -> Result<(), AppError> {
    run_migrations(db).await?;
    Ok(())
}
