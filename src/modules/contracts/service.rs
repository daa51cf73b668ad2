use sqlx::PgPool;
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{Contract, CreateContractDto};

use crate::modules::clients::service::ClientService;

pub struct ContractService;

impl ContractService {
    #[instrument(skip(db))]
    pub async fn create_contract(
        db: &PgPool,
        client_id: i32,
        user_id: i32,
        dto: CreateContractDto,
    ) -> Result<Contract, AppError> {
        let client = ClientService::find_client(db, client_id).await?;

        let contract = sqlx::query_as::<_, Contract>(
            r#"INSERT INTO contracts (user_id, client_id, contract_details)
               VALUES ($1, $2, $3)
               RETURNING id, user_id, client_id, contract_details, created_at, updated_at"#,
        )
        .bind(user_id)
        .bind(client.id)
        .bind(&dto.contract_details)
        .fetch_one(db)
        .await?;

        Ok(contract)
    }

    pub async fn contracts_for_client(
        db: &PgPool,
        client_id: i32,
    ) -> Result<Vec<Contract>, AppError> {
        let contracts = sqlx::query_as::<_, Contract>(
            r#"SELECT id, user_id, client_id, contract_details, created_at, updated_at
               FROM contracts WHERE client_id = $1 ORDER BY id"#,
        )
        .bind(client_id)
        .fetch_all(db)
        .await?;

        Ok(contracts)
    }
}
