//! Highlight model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use flipbook_core::annotation::Rect;
use flipbook_core::types::{BookId, DbId, Timestamp};

/// A row from the `highlights` table.
///
/// `rects` is stored as a serialized JSON array; use [`Highlight::rects`]
/// to decode it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Highlight {
    pub id: DbId,
    pub book_id: BookId,
    /// 1-indexed page the highlight belongs to.
    pub page: i64,
    pub rects: String,
    pub color: String,
    pub created_at: Timestamp,
}

impl Highlight {
    /// Decode the stored rectangle list.
    ///
    /// The column is only ever written from a `Vec<Rect>` serialization,
    /// so a decode failure means the row was tampered with; it surfaces
    /// as a `serde_json::Error` rather than being silently dropped.
    pub fn rects(&self) -> Result<Vec<Rect>, serde_json::Error> {
        serde_json::from_str(&self.rects)
    }
}

/// DTO for upserting the highlight of a single page.
#[derive(Debug, Deserialize)]
pub struct UpsertHighlight {
    pub page: i64,
    pub rects: Vec<Rect>,
    /// Used only when the page has no highlight row yet; an existing
    /// row keeps its color.
    pub color: Option<String>,
}
