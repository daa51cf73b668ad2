use anyhow::anyhow;
use sqlx::PgExecutor;
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::ClientDetails;

pub struct ClientService;

impl ClientService {
    #[instrument(skip(executor))]
    pub async fn find_client_optional<'e, E>(
        executor: E,
        client_id: i32,
    ) -> Result<Option<ClientDetails>, AppError>
    where
        E: PgExecutor<'e>,
    {
        let client = sqlx::query_as::<_, ClientDetails>(
            r#"SELECT id, user_id, name, email, phone, address, initial_contact,
                      point_of_contact, created_at, updated_at
               FROM client_details WHERE id = $1"#,
        )
        .bind(client_id)
        .fetch_optional(executor)
        .await?;

        Ok(client)
    }

    /// Like [`find_client_optional`](Self::find_client_optional) but a missing
    /// client is a 404.
    pub async fn find_client<'e, E>(executor: E, client_id: i32) -> Result<ClientDetails, AppError>
    where
        E: PgExecutor<'e>,
    {
        Self::find_client_optional(executor, client_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Client not found")))
    }

    /// Marks the client as modified.
    pub async fn touch<'e, E>(executor: E, client_id: i32) -> Result<(), AppError>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query("UPDATE client_details SET updated_at = NOW() WHERE id = $1")
            .bind(client_id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
