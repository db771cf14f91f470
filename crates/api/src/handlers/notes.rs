//! Handlers for per-page notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use flipbook_core::annotation::validate_page_number;
use flipbook_core::error::CoreError;
use flipbook_core::types::{DbId, Timestamp};
use flipbook_db::models::note::{CreateNote, Note};
use flipbook_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::books::ensure_book_exists;
use crate::state::AppState;

/// A note as exposed over the API. The book id is implicit in the
/// request path, so it is not repeated in every element.
#[derive(Debug, Serialize)]
pub struct NoteView {
    pub id: DbId,
    pub page: i64,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            page: note.page,
            content: note.content,
            created_at: note.created_at,
        }
    }
}

/// Typed response for note creation.
#[derive(Debug, Serialize)]
pub struct NoteCreated {
    id: DbId,
}

/// Typed response for note deletion.
#[derive(Debug, Serialize)]
pub struct NoteDeleted {
    success: bool,
}

/// GET /api/notes/{book_id}
///
/// List all notes for a book in insertion order.
pub async fn list_notes(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_book_exists(&state.pool, &book_id).await?;

    let notes = NoteRepo::list_by_book(&state.pool, &book_id).await?;
    let views: Vec<NoteView> = notes.into_iter().map(NoteView::from).collect();
    Ok(Json(views))
}

/// POST /api/notes/{book_id}
///
/// Create a note on a page of a book.
pub async fn create_note(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    ensure_book_exists(&state.pool, &book_id).await?;
    validate_page_number(input.page).map_err(AppError::Core)?;

    let note = NoteRepo::create(&state.pool, &book_id, &input).await?;

    tracing::info!(
        book_id = %book_id,
        note_id = note.id,
        page = note.page,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(NoteCreated { id: note.id })))
}

/// DELETE /api/notes/{note_id}
///
/// Delete a note by its identifier.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete(&state.pool, note_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: note_id.to_string(),
        }));
    }

    tracing::info!(note_id, "Note deleted");

    Ok(Json(NoteDeleted { success: true }))
}
