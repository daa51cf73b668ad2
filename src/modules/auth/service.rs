use anyhow::anyhow;
use sqlx::{PgExecutor, PgPool};
use tracing::{info, instrument, warn};

use pearldecor_auth::create_access_token;
use pearldecor_config::JwtConfig;
use pearldecor_core::{AppError, Credentials, UserRole};
use pearldecor_models::{LoginRequest, LoginResponse, NewUser, RegisterRequest, User};

pub struct AuthService;

impl AuthService {
    /// Creates the user and, in the same transaction, the profile row for its
    /// role. Nothing is written if either insert fails.
    #[instrument(skip(db))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        if Self::find_by_username(db, &dto.username).await?.is_some() {
            return Err(AppError::conflict(anyhow!(
                "Username already taken, please choose another one"
            )));
        }

        let mut new_user = NewUser::new(dto.username.clone(), dto.role);
        new_user.set_password(&dto.password)?;

        let mut tx = db.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, password_hash, role)
               VALUES ($1, $2, $3)
               RETURNING id, username, password_hash, role, created_at, updated_at"#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!(
                    "Username already taken, please choose another one"
                ));
            }
            AppError::from(e)
        })?;

        Self::create_details(&mut *tx, &user, &dto).await.map_err(|e| {
            warn!(error = %e, username = %user.username, "Failed to create user details");
            AppError::internal_error("Error creating user details, please try again")
        })?;

        tx.commit().await?;

        info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    async fn create_details<'e, E>(
        executor: E,
        user: &User,
        dto: &RegisterRequest,
    ) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let name = dto.name.clone().unwrap_or_default();

        match user.role {
            UserRole::Client => {
                sqlx::query(
                    r#"INSERT INTO client_details
                       (user_id, name, email, phone, address, initial_contact, point_of_contact)
                       VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
                )
                .bind(user.id)
                .bind(name)
                .bind(dto.email.clone().unwrap_or_default())
                .bind(dto.phone.clone().unwrap_or_default())
                .bind(dto.address.clone().unwrap_or_default())
                .bind(dto.initial_contact.clone().unwrap_or_default())
                .bind(dto.point_of_contact.clone().unwrap_or_default())
                .execute(executor)
                .await?;
            }
            UserRole::Admin => {
                sqlx::query(
                    r#"INSERT INTO employee_details (user_id, name, role, permissions)
                       VALUES ($1, $2, $3, $4)"#,
                )
                .bind(user.id)
                .bind(name)
                .bind(user.role.as_str())
                .bind(dto.permissions.clone().unwrap_or_default())
                .execute(executor)
                .await?;
            }
        }

        Ok(())
    }

    #[instrument(skip(db, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = Self::find_by_username(db, &dto.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !user.check_password(&dto.password)? {
            warn!(username = %dto.username, "Login failed: wrong password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let access_token = create_access_token(user.id, user.role, jwt_config)?;

        Ok(LoginResponse { access_token })
    }

    pub async fn find_by_username<'e, E>(
        executor: E,
        username: &str,
    ) -> Result<Option<User>, AppError>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, username, password_hash, role, created_at, updated_at
               FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }
}
