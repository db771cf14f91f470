//! Handlers for book ingestion and viewing.
//!
//! Provides the upload endpoint (multipart), the flipbook viewer page,
//! the original-file download, and the conversion status endpoint the
//! frontend polls while a book is still rasterizing.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;

use flipbook_core::book::{storage_filename, validate_pdf_upload};
use flipbook_core::error::CoreError;
use flipbook_db::models::book::{Book, BookStatus, CreateBook};
use flipbook_db::repositories::BookRepo;
use flipbook_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::ingest;
use crate::state::AppState;

/// Viewer page template; placeholders are substituted server-side.
const FLIPBOOK_TEMPLATE: &str = include_str!("../../static/flipbook.html");

/// Typed response for the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    id: String,
    redirect: String,
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// POST /upload
///
/// Accept a multipart PDF upload, stage the file, create the book row in
/// `processing` status, and kick off background page rasterization. The
/// response returns before conversion finishes; clients follow `redirect`
/// and poll the status endpoint.
pub async fn upload_book(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResult>)> {
    // Take the first field that carries a filename; the upload form
    // submits exactly one, named "pdf".
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        upload = Some((filename, data));
        break;
    }

    let Some((original_filename, data)) = upload else {
        return Err(AppError::Core(CoreError::Validation(
            "No file selected".to_string(),
        )));
    };

    validate_pdf_upload(Some(&original_filename)).map_err(AppError::Core)?;

    let book_id = uuid::Uuid::new_v4().to_string();
    let stored_filename = storage_filename(&book_id, &original_filename);

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(state.config.upload_path(&stored_filename), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let book = BookRepo::create(
        &state.pool,
        &CreateBook {
            id: book_id.clone(),
            title: original_filename,
            stored_filename,
        },
    )
    .await?;

    tracing::info!(
        book_id = %book.id,
        title = %book.title,
        size_bytes = data.len(),
        "Book uploaded, conversion queued"
    );

    ingest::spawn_conversion(state.clone(), book.clone());

    Ok((
        StatusCode::CREATED,
        Json(UploadResult {
            redirect: format!("/flipbook/{book_id}"),
            id: book_id,
        }),
    ))
}

/// GET /flipbook/{book_id}
///
/// Render the viewer page for a book. The page embeds the book metadata
/// and the extracted table of contents; the frontend drives navigation,
/// annotations, and status polling from there.
pub async fn flipbook_viewer(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Html<String>> {
    let book = find_book(&state.pool, &book_id).await?;

    // Best-effort: an empty TOC never blocks the viewer.
    let toc =
        flipbook_pdf::extract_toc_or_empty(&state.config.upload_path(&book.stored_filename)).await;
    let toc_json = serde_json::to_string(&toc)
        .map_err(|e| AppError::InternalError(format!("Failed to encode TOC: {e}")))?;

    let page = FLIPBOOK_TEMPLATE
        .replace("__BOOK_ID__", &book.id)
        .replace("__TITLE__", &html_escape(&book.title))
        .replace("__PAGE_COUNT__", &book.page_count.to_string())
        .replace("__STATUS__", &book.status)
        .replace("__TOC_JSON__", &toc_json);

    Ok(Html(page))
}

/// GET /download/{book_id}
///
/// Send the original uploaded PDF back as an attachment.
pub async fn download_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let book = find_book(&state.pool, &book_id).await?;

    let path = state.config.upload_path(&book.stored_filename);
    let bytes = tokio::fs::read(&path).await.map_err(|_| {
        // The row exists but the file is gone (e.g. failed conversion
        // cleanup); to the client the book has nothing to download.
        AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id.clone(),
        })
    })?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        book.title.replace(['"', '\\'], "_")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// GET /api/books/{book_id}/status
///
/// Conversion status polling endpoint.
pub async fn book_status(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookStatus>> {
    let book = find_book(&state.pool, &book_id).await?;

    Ok(Json(BookStatus {
        status: book.status,
        page_count: book.page_count,
    }))
}

/* --------------------------------------------------------------------------
   Helpers
   -------------------------------------------------------------------------- */

/// Load a book or map its absence to a 404.
pub async fn find_book(pool: &DbPool, book_id: &str) -> Result<Book, AppError> {
    BookRepo::find_by_id(pool, book_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Book",
                id: book_id.to_string(),
            })
        })
}

/// Return a 404 unless the book exists.
pub async fn ensure_book_exists(pool: &DbPool, book_id: &str) -> Result<(), AppError> {
    if !BookRepo::exists(pool, book_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id.to_string(),
        }));
    }
    Ok(())
}

/// Minimal HTML escaping for text interpolated into the viewer template.
fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
