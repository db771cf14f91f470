//! Background book conversion.
//!
//! The upload handler responds as soon as the PDF is stored and the book
//! row exists; rasterization runs in a spawned task and reports through
//! the `books.status` column, which the frontend polls. A conversion
//! failure removes every filesystem artifact it produced (the stored
//! upload and any partially written page images) and leaves the row as a
//! `failed` tombstone.

use tokio::task::JoinHandle;

use flipbook_db::models::book::Book;
use flipbook_db::repositories::BookRepo;

use crate::state::AppState;

/// Spawn the conversion task for a freshly uploaded book.
pub fn spawn_conversion(state: AppState, book: Book) -> JoinHandle<()> {
    tokio::spawn(async move {
        run_conversion(&state, &book).await;
    })
}

/// Rasterize a book's pages and record the outcome.
///
/// Separated from [`spawn_conversion`] so tests can await the whole
/// pipeline directly.
pub async fn run_conversion(state: &AppState, book: &Book) {
    let pdf_path = state.config.upload_path(&book.stored_filename);
    let pages_dir = state.config.book_pages_dir(&book.id);

    match flipbook_pdf::rasterize_to_dir(&pdf_path, &pages_dir).await {
        Ok(page_count) => {
            match BookRepo::mark_ready(&state.pool, &book.id, page_count as i64).await {
                Ok(Some(_)) => {
                    tracing::info!(book_id = %book.id, page_count, "Book conversion finished");
                }
                Ok(None) => {
                    tracing::warn!(book_id = %book.id, "Book row vanished during conversion");
                }
                Err(e) => {
                    tracing::error!(book_id = %book.id, error = %e, "Failed to record conversion result");
                }
            }
        }
        Err(e) => {
            tracing::error!(book_id = %book.id, error = %e, "Book conversion failed");

            // All-or-none artifacts: drop the upload and any partial pages.
            if let Err(e) = tokio::fs::remove_file(&pdf_path).await {
                tracing::warn!(book_id = %book.id, error = %e, "Failed to remove stored upload");
            }
            // The pages dir only exists if rasterization got far enough
            // to create it, so NotFound here is the common case.
            match tokio::fs::remove_dir_all(&pages_dir).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(book_id = %book.id, error = %e, "Failed to remove pages dir");
                }
            }

            if let Err(e) = BookRepo::mark_failed(&state.pool, &book.id).await {
                tracing::error!(book_id = %book.id, error = %e, "Failed to mark book as failed");
            }
        }
    }
}
