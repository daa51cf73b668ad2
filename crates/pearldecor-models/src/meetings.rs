//! Meetings between a client and an employee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Meeting {
    pub id: i32,
    /// User who scheduled the meeting.
    pub user_id: i32,
    pub client_id: i32,
    /// User id of the attending employee, as on notes.
    pub employee_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub details: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMeetingDto {
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub details: Option<String>,
    /// User id of the attending employee. Defaults to the caller.
    #[serde(default)]
    pub employee_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MeetingSummary {
    pub meeting_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub details: String,
    pub employee_id: i32,
}

impl From<Meeting> for MeetingSummary {
    fn from(meeting: Meeting) -> Self {
        Self {
            meeting_id: meeting.id,
            scheduled_at: meeting.scheduled_at,
            details: meeting.details,
            employee_id: meeting.employee_id,
        }
    }
}
