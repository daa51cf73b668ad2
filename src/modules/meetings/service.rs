use anyhow::anyhow;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateMeetingDto, EmployeeDetails, Meeting};

use crate::modules::clients::service::ClientService;

pub struct MeetingService;

impl MeetingService {
    /// Schedules a meeting with the client. `employee_id` is the attending
    /// employee's user id; without it the meeting is assigned to the caller.
    #[instrument(skip(db))]
    pub async fn create_meeting(
        db: &PgPool,
        client_id: i32,
        user_id: i32,
        dto: CreateMeetingDto,
    ) -> Result<Meeting, AppError> {
        let client = ClientService::find_client(db, client_id).await?;

        let employee = Self::find_employee_by_user(db, dto.employee_id.unwrap_or(user_id))
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Employee not found")))?;

        let meeting = sqlx::query_as::<_, Meeting>(
            r#"INSERT INTO meetings (user_id, client_id, employee_id, scheduled_at, details)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, user_id, client_id, employee_id, scheduled_at, details,
                         created_at, updated_at"#,
        )
        .bind(user_id)
        .bind(client.id)
        .bind(employee.user_id)
        .bind(dto.scheduled_at)
        .bind(dto.details.unwrap_or_default())
        .fetch_one(db)
        .await?;

        Ok(meeting)
    }

    pub async fn meetings_for_client(
        db: &PgPool,
        client_id: i32,
    ) -> Result<Vec<Meeting>, AppError> {
        let meetings = sqlx::query_as::<_, Meeting>(
            r#"SELECT id, user_id, client_id, employee_id, scheduled_at, details,
                      created_at, updated_at
               FROM meetings WHERE client_id = $1 ORDER BY scheduled_at, id"#,
        )
        .bind(client_id)
        .fetch_all(db)
        .await?;

        Ok(meetings)
    }

    async fn find_employee_by_user<'e, E>(
        executor: E,
        user_id: i32,
    ) -> Result<Option<EmployeeDetails>, AppError>
    where
        E: PgExecutor<'e>,
    {
        let employee = sqlx::query_as::<_, EmployeeDetails>(
            r#"SELECT id, user_id, name, role, permissions, created_at, updated_at
               FROM employee_details WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        Ok(employee)
    }
}
