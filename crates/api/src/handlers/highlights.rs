//! Handlers for per-page highlight annotations.
//!
//! A page has at most one highlight record; resubmitting for the same
//! page replaces its rectangle list. Rectangles round-trip exactly as
//! submitted.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use flipbook_core::annotation::{validate_page_number, validate_rects, Rect};
use flipbook_core::types::DbId;
use flipbook_db::models::highlight::UpsertHighlight;
use flipbook_db::repositories::HighlightRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::books::ensure_book_exists;
use crate::state::AppState;

/// A highlight as exposed over the API: rects decoded from storage.
#[derive(Debug, Serialize)]
pub struct HighlightView {
    pub id: DbId,
    pub page: i64,
    pub rects: Vec<Rect>,
    pub color: String,
}

/// Typed response for highlight upserts.
#[derive(Debug, Serialize)]
pub struct HighlightSaved {
    success: bool,
}

/// GET /api/highlights/{book_id}
///
/// List all highlights for a book with parsed rectangle lists.
pub async fn list_highlights(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_book_exists(&state.pool, &book_id).await?;

    let highlights = HighlightRepo::list_by_book(&state.pool, &book_id).await?;

    let views = highlights
        .into_iter()
        .map(|h| {
            let rects = h.rects().map_err(|e| {
                AppError::InternalError(format!(
                    "Stored rects for highlight {} are not decodable: {e}",
                    h.id
                ))
            })?;
            Ok(HighlightView {
                id: h.id,
                page: h.page,
                rects,
                color: h.color,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(views))
}

/// POST /api/highlights/{book_id}
///
/// Upsert the highlight for one page: replace the rectangle list if the
/// page already has a record, otherwise create one (color defaults to
/// semi-transparent yellow when omitted).
pub async fn upsert_highlight(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(input): Json<UpsertHighlight>,
) -> AppResult<impl IntoResponse> {
    ensure_book_exists(&state.pool, &book_id).await?;
    validate_page_number(input.page).map_err(AppError::Core)?;
    validate_rects(&input.rects).map_err(AppError::Core)?;

    let highlight = HighlightRepo::upsert(
        &state.pool,
        &book_id,
        input.page,
        &input.rects,
        input.color.as_deref(),
    )
    .await?;

    tracing::info!(
        book_id = %book_id,
        highlight_id = highlight.id,
        page = highlight.page,
        rect_count = input.rects.len(),
        "Highlight saved"
    );

    Ok(Json(HighlightSaved { success: true }))
}
