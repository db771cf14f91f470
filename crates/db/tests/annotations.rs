//! Integration tests for note and highlight repositories.
//!
//! Exercises the annotation layer against a real database:
//! - Note create/list/delete and per-book scoping
//! - Highlight upsert semantics: one row per (book, page), rects
//!   replaced on resubmission, color kept from the first write
//! - Exact rect round-trip through the serialized column

use sqlx::SqlitePool;

use flipbook_core::annotation::{Rect, DEFAULT_HIGHLIGHT_COLOR};
use flipbook_db::models::book::CreateBook;
use flipbook_db::models::note::CreateNote;
use flipbook_db::repositories::{BookRepo, HighlightRepo, NoteRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_book(pool: &SqlitePool) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    BookRepo::create(
        pool,
        &CreateBook {
            id: id.clone(),
            title: "seed.pdf".to_string(),
            stored_filename: format!("{id}_seed.pdf"),
        },
    )
    .await
    .unwrap();
    id
}

fn rect(x: f64, y: f64) -> Rect {
    Rect {
        x,
        y,
        width: 0.25,
        height: 0.05,
    }
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_list_notes(pool: SqlitePool) {
    let book_id = seed_book(&pool).await;

    let first = NoteRepo::create(
        &pool,
        &book_id,
        &CreateNote {
            page: 3,
            content: "check this diagram".to_string(),
        },
    )
    .await
    .unwrap();

    NoteRepo::create(
        &pool,
        &book_id,
        &CreateNote {
            page: 1,
            content: "intro".to_string(),
        },
    )
    .await
    .unwrap();

    let notes = NoteRepo::list_by_book(&pool, &book_id).await.unwrap();
    assert_eq!(notes.len(), 2);
    // Insertion order, not page order.
    assert_eq!(notes[0].id, first.id);
    assert_eq!(notes[0].page, 3);
    assert_eq!(notes[0].content, "check this diagram");
}

#[sqlx::test]
async fn test_notes_are_scoped_to_book(pool: SqlitePool) {
    let book_a = seed_book(&pool).await;
    let book_b = seed_book(&pool).await;

    NoteRepo::create(
        &pool,
        &book_a,
        &CreateNote {
            page: 1,
            content: "only in a".to_string(),
        },
    )
    .await
    .unwrap();

    let notes_b = NoteRepo::list_by_book(&pool, &book_b).await.unwrap();
    assert!(notes_b.is_empty());
}

#[sqlx::test]
async fn test_delete_note(pool: SqlitePool) {
    let book_id = seed_book(&pool).await;
    let note = NoteRepo::create(
        &pool,
        &book_id,
        &CreateNote {
            page: 1,
            content: "gone soon".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(NoteRepo::list_by_book(&pool, &book_id).await.unwrap().is_empty());

    // Second delete finds nothing.
    assert!(!NoteRepo::delete(&pool, note.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Highlights
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_highlight_insert_defaults_color(pool: SqlitePool) {
    let book_id = seed_book(&pool).await;

    let hl = HighlightRepo::upsert(&pool, &book_id, 2, &[rect(0.1, 0.2)], None)
        .await
        .unwrap();

    assert_eq!(hl.page, 2);
    assert_eq!(hl.color, DEFAULT_HIGHLIGHT_COLOR);
    assert_eq!(hl.rects().unwrap(), vec![rect(0.1, 0.2)]);
}

#[sqlx::test]
async fn test_highlight_upsert_replaces_rects_keeps_color(pool: SqlitePool) {
    let book_id = seed_book(&pool).await;

    let first = HighlightRepo::upsert(
        &pool,
        &book_id,
        5,
        &[rect(0.1, 0.1)],
        Some("rgba(0, 200, 0, 0.4)"),
    )
    .await
    .unwrap();

    let second = HighlightRepo::upsert(
        &pool,
        &book_id,
        5,
        &[rect(0.3, 0.3), rect(0.5, 0.5)],
        Some("rgba(200, 0, 0, 0.4)"),
    )
    .await
    .unwrap();

    // Same row, replaced rects, original color.
    assert_eq!(second.id, first.id);
    assert_eq!(second.rects().unwrap(), vec![rect(0.3, 0.3), rect(0.5, 0.5)]);
    assert_eq!(second.color, "rgba(0, 200, 0, 0.4)");

    let all = HighlightRepo::list_by_book(&pool, &book_id).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test]
async fn test_highlight_rect_round_trip(pool: SqlitePool) {
    let book_id = seed_book(&pool).await;
    let rects = vec![
        Rect { x: 0.123456, y: 0.654321, width: 0.111, height: 0.0625 },
        Rect { x: 0.0, y: 0.99, width: 1.0, height: 0.01 },
    ];

    HighlightRepo::upsert(&pool, &book_id, 1, &rects, None)
        .await
        .unwrap();

    let stored = HighlightRepo::find_by_page(&pool, &book_id, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.rects().unwrap(), rects);
}

#[sqlx::test]
async fn test_highlights_per_page_are_independent(pool: SqlitePool) {
    let book_id = seed_book(&pool).await;

    HighlightRepo::upsert(&pool, &book_id, 1, &[rect(0.1, 0.1)], None)
        .await
        .unwrap();
    HighlightRepo::upsert(&pool, &book_id, 2, &[rect(0.2, 0.2)], None)
        .await
        .unwrap();

    let all = HighlightRepo::list_by_book(&pool, &book_id).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].page, 1);
    assert_eq!(all[1].page, 2);
}
