//! Feedback a client leaves on their own profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Feedback {
    pub id: i32,
    /// Author of the feedback.
    pub user_id: i32,
    pub client_id: i32,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFeedbackDto {
    pub feedback: String,
}

/// Listing view returned by `GET /clients/{id}/feedbacks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackEntry {
    pub id: i32,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackEntry {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            feedback: feedback.feedback,
            created_at: feedback.created_at,
            updated_at: feedback.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackList {
    pub feedbacks: Vec<FeedbackEntry>,
}

/// Report view: id and text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackSummary {
    pub id: i32,
    pub feedback: String,
}

impl From<Feedback> for FeedbackSummary {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            feedback: feedback.feedback,
        }
    }
}
