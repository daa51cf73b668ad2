//! Contracts between the business and a client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Contract {
    pub id: i32,
    /// Creator of the contract.
    pub user_id: i32,
    pub client_id: i32,
    pub contract_details: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContractDto {
    pub contract_details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContractSummary {
    pub id: i32,
    pub details: String,
}

impl From<Contract> for ContractSummary {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            details: contract.contract_details,
        }
    }
}
