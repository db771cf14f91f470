//! Note model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use flipbook_core::types::{BookId, DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub book_id: BookId,
    /// 1-indexed page the note is pinned to.
    pub page: i64,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub page: i64,
    pub content: String,
}
