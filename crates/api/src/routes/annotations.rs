//! Route definitions for notes and highlights, mounted under `/api`.
//!
//! The `/notes/{id}` path carries a book id for GET/POST and a note id
//! for DELETE; the frontend deletes notes by their own id.

use axum::routing::get;
use axum::Router;

use crate::handlers::{highlights, notes};
use crate::state::AppState;

/// Annotation routes.
///
/// ```text
/// GET    /notes/{book_id}        list_notes
/// POST   /notes/{book_id}        create_note
/// DELETE /notes/{note_id}        delete_note
/// GET    /highlights/{book_id}   list_highlights
/// POST   /highlights/{book_id}   upsert_highlight
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/notes/{id}",
            get(notes::list_notes)
                .post(notes::create_note)
                .delete(notes::delete_note),
        )
        .route(
            "/highlights/{book_id}",
            get(highlights::list_highlights).post(highlights::upsert_highlight),
        )
}
