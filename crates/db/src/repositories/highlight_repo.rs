//! Repository for the `highlights` table.
//!
//! At most one highlight row exists per (book, page); see
//! [`HighlightRepo::upsert`].

use flipbook_core::annotation::{Rect, DEFAULT_HIGHLIGHT_COLOR};

use crate::models::highlight::Highlight;
use crate::DbPool;

/// Column list for highlights queries.
const COLUMNS: &str = "id, book_id, page, rects, color, created_at";

/// Provides read and upsert operations for highlights.
pub struct HighlightRepo;

impl HighlightRepo {
    /// List all highlights for a book, ordered by page.
    pub async fn list_by_book(
        pool: &DbPool,
        book_id: &str,
    ) -> Result<Vec<Highlight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM highlights
             WHERE book_id = $1
             ORDER BY page ASC"
        );
        sqlx::query_as::<_, Highlight>(&query)
            .bind(book_id)
            .fetch_all(pool)
            .await
    }

    /// Find the highlight for a specific (book, page), if any.
    pub async fn find_by_page(
        pool: &DbPool,
        book_id: &str,
        page: i64,
    ) -> Result<Option<Highlight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM highlights
             WHERE book_id = $1 AND page = $2"
        );
        sqlx::query_as::<_, Highlight>(&query)
            .bind(book_id)
            .bind(page)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the highlight for a (book, page).
    ///
    /// An existing row has only its rectangle list replaced; the color
    /// set at creation is kept. A new row takes the given color, or the
    /// default semi-transparent yellow when none is supplied. Concurrent
    /// submissions for the same page resolve last-write-wins.
    pub async fn upsert(
        pool: &DbPool,
        book_id: &str,
        page: i64,
        rects: &[Rect],
        color: Option<&str>,
    ) -> Result<Highlight, sqlx::Error> {
        let rects_json = serde_json::to_string(rects)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "INSERT INTO highlights (book_id, page, rects, color)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (book_id, page) DO UPDATE SET rects = excluded.rects
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Highlight>(&query)
            .bind(book_id)
            .bind(page)
            .bind(&rects_json)
            .bind(color.unwrap_or(DEFAULT_HIGHLIGHT_COLOR))
            .fetch_one(pool)
            .await
    }
}
