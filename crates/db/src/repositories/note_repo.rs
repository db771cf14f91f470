//! Repository for the `notes` table.

use flipbook_core::types::DbId;

use crate::models::note::{CreateNote, Note};
use crate::DbPool;

/// Column list for notes queries.
const COLUMNS: &str = "id, book_id, page, content, created_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a new note, returning the created row.
    pub async fn create(
        pool: &DbPool,
        book_id: &str,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (book_id, page, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(book_id)
            .bind(input.page)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all notes for a book in insertion order.
    pub async fn list_by_book(pool: &DbPool, book_id: &str) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE book_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(book_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a note by its ID. Returns true if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
