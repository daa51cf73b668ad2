//! Notes admins attach to a client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: i32,
    pub client_id: i32,
    /// Author, the `users.id` of an admin.
    pub employee_id: i32,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteDto {
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteEntry {
    pub id: i32,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub employee_id: i32,
}

impl From<Note> for NoteEntry {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            note: note.note,
            created_at: note.created_at,
            updated_at: note.updated_at,
            employee_id: note.employee_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteList {
    pub notes: Vec<NoteEntry>,
}
