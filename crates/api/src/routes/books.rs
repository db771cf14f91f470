//! Route definitions for book ingestion and viewing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Root-level book routes.
///
/// ```text
/// POST /upload               upload_book (multipart)
/// GET  /flipbook/{book_id}   flipbook_viewer
/// GET  /download/{book_id}   download_book
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(books::upload_book))
        .route("/flipbook/{book_id}", get(books::flipbook_viewer))
        .route("/download/{book_id}", get(books::download_book))
}

/// Status polling route, mounted under `/api`.
///
/// ```text
/// GET /books/{book_id}/status   book_status
/// ```
pub fn status_router() -> Router<AppState> {
    Router::new().route("/books/{book_id}/status", get(books::book_status))
}
