//! Book model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use flipbook_core::types::{BookId, Timestamp};

/// A row from the `books` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: BookId,
    /// Original filename as uploaded, used as the display title.
    pub title: String,
    /// UUID-prefixed sanitized filename under the uploads directory.
    pub stored_filename: String,
    /// Number of rasterized pages; 0 until conversion finishes.
    pub page_count: i64,
    /// One of `processing`, `ready`, `failed`.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new book at upload time.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub id: BookId,
    pub title: String,
    pub stored_filename: String,
}

/// Conversion status as exposed by the status-polling endpoint.
#[derive(Debug, Serialize)]
pub struct BookStatus {
    pub status: String,
    pub page_count: i64,
}
