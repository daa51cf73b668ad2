//! Employee profiles, created for every admin account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EmployeeDetails {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    /// Job role, free text. Filled with the account role at registration.
    pub role: String,
    pub permissions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
