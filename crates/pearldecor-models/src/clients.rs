//! Client profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `client_details` table. Each belongs to exactly one
/// client-role user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClientDetails {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub initial_contact: String,
    pub point_of_contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The contact portion of a client profile, as shown in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub initial_contact: String,
    pub point_of_contact: String,
}

impl From<&ClientDetails> for ClientProfile {
    fn from(client: &ClientDetails) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            initial_contact: client.initial_contact.clone(),
            point_of_contact: client.point_of_contact.clone(),
        }
    }
}
