//! Repository for the `books` table.

use flipbook_core::book::{BOOK_STATUS_FAILED, BOOK_STATUS_READY};

use crate::models::book::{Book, CreateBook};
use crate::DbPool;

/// Column list for books queries.
const COLUMNS: &str = "id, title, stored_filename, page_count, status, created_at";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book in `processing` status, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (id, title, stored_filename)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.stored_filename)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all books, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Record a finished conversion: set the final page count and flip the
    /// status to `ready`. Returns the updated row.
    pub async fn mark_ready(
        pool: &DbPool,
        id: &str,
        page_count: i64,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET page_count = $1, status = $2
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(page_count)
            .bind(BOOK_STATUS_READY)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a failed conversion. The row survives as a tombstone so the
    /// status endpoint can report the failure.
    pub async fn mark_failed(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE books SET status = $1 WHERE id = $2")
            .bind(BOOK_STATUS_FAILED)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a book row exists.
    pub async fn exists(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }
}
