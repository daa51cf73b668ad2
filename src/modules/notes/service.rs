use sqlx::PgPool;
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::{CreateNoteDto, Note, NoteEntry, NoteList};

use crate::modules::clients::service::ClientService;

pub struct NoteService;

impl NoteService {
    /// Appends a note authored by `employee_id` and bumps the client's
    /// `updated_at`, both in one transaction.
    #[instrument(skip(db))]
    pub async fn add_note(
        db: &PgPool,
        client_id: i32,
        employee_id: i32,
        dto: CreateNoteDto,
    ) -> Result<Note, AppError> {
        let mut tx = db.begin().await?;

        let client = ClientService::find_client(&mut *tx, client_id).await?;

        let note = sqlx::query_as::<_, Note>(
            r#"INSERT INTO notes (client_id, employee_id, note)
               VALUES ($1, $2, $3)
               RETURNING id, client_id, employee_id, note, created_at, updated_at"#,
        )
        .bind(client.id)
        .bind(employee_id)
        .bind(&dto.note)
        .fetch_one(&mut *tx)
        .await?;

        ClientService::touch(&mut *tx, client.id).await?;

        tx.commit().await?;

        Ok(note)
    }

    #[instrument(skip(db))]
    pub async fn list_notes(db: &PgPool, client_id: i32) -> Result<NoteList, AppError> {
        let client = ClientService::find_client(db, client_id).await?;
        let notes = Self::notes_for_client(db, client.id).await?;

        Ok(NoteList {
            notes: notes.into_iter().map(NoteEntry::from).collect(),
        })
    }

    pub async fn notes_for_client(db: &PgPool, client_id: i32) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"SELECT id, client_id, employee_id, note, created_at, updated_at
               FROM notes WHERE client_id = $1 ORDER BY id"#,
        )
        .bind(client_id)
        .fetch_all(db)
        .await?;

        Ok(notes)
    }
}
