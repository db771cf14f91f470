pub mod annotations;
pub mod books;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Annotation API routes mounted under `/api`.
///
/// ```text
/// GET    /books/{book_id}/status   conversion status polling
/// GET    /notes/{book_id}          list notes
/// POST   /notes/{book_id}          create note
/// DELETE /notes/{note_id}          delete note
/// GET    /highlights/{book_id}     list highlights
/// POST   /highlights/{book_id}     upsert page highlight
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(annotations::router())
        .merge(books::status_router())
}
