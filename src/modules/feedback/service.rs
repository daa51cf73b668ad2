use sqlx::PgPool;
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateFeedbackDto, Feedback, FeedbackEntry, FeedbackList};

use crate::middleware::auth::AuthUser;
use crate::modules::clients::service::ClientService;
use crate::utils::auth_helpers::ensure_owns_client;

pub struct FeedbackService;

impl FeedbackService {
    /// Records feedback from the client's own user. Nothing is written when
    /// the client is missing or belongs to someone else.
    #[instrument(skip(db))]
    pub async fn create_feedback(
        db: &PgPool,
        auth_user: &AuthUser,
        client_id: i32,
        dto: CreateFeedbackDto,
    ) -> Result<Feedback, AppError> {
        let user_id = auth_user.user_id()?;
        let client = ensure_owns_client(
            auth_user,
            ClientService::find_client_optional(db, client_id).await?,
        )?;

        let feedback = sqlx::query_as::<_, Feedback>(
            r#"INSERT INTO feedbacks (user_id, client_id, feedback)
               VALUES ($1, $2, $3)
               RETURNING id, user_id, client_id, feedback, created_at, updated_at"#,
        )
        .bind(user_id)
        .bind(client.id)
        .bind(&dto.feedback)
        .fetch_one(db)
        .await?;

        Ok(feedback)
    }

    #[instrument(skip(db))]
    pub async fn list_feedbacks(db: &PgPool, client_id: i32) -> Result<FeedbackList, AppError> {
        let client = ClientService::find_client(db, client_id).await?;
        let feedbacks = Self::feedbacks_for_client(db, client.id).await?;

        Ok(FeedbackList {
            feedbacks: feedbacks.into_iter().map(FeedbackEntry::from).collect(),
        })
    }

    pub async fn feedbacks_for_client(
        db: &PgPool,
        client_id: i32,
    ) -> Result<Vec<Feedback>, AppError> {
        let feedbacks = sqlx::query_as::<_, Feedback>(
            r#"SELECT id, user_id, client_id, feedback, created_at, updated_at
               FROM feedbacks WHERE client_id = $1 ORDER BY id"#,
        )
        .bind(client_id)
        .fetch_all(db)
        .await?;

        Ok(feedbacks)
    }
}
