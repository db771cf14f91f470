//! Core constants and pure logic for book ingestion.
//!
//! This module has zero external dependencies (no DB, no async, no I/O).
//! It provides:
//!
//! - Conversion status names for the `books.status` column.
//! - Upload validation: a file must be present, named, and end in `.pdf`.
//! - Filename sanitization and storage-name construction.

use crate::error::CoreError;

// ── Conversion status names ──────────────────────────────────────────

/// The book row exists and its upload is stored, but page rasterization
/// has not finished yet.
pub const BOOK_STATUS_PROCESSING: &str = "processing";

/// All pages were rasterized and `page_count` is final.
pub const BOOK_STATUS_READY: &str = "ready";

/// Conversion failed; the stored upload and any partial page images were
/// removed and the row remains as a tombstone for status polling.
pub const BOOK_STATUS_FAILED: &str = "failed";

// ── Upload validation ────────────────────────────────────────────────

/// Validate an uploaded filename.
///
/// Rejects a missing or empty filename, and anything whose name does not
/// end in `.pdf` (case-insensitive).
pub fn validate_pdf_upload(filename: Option<&str>) -> Result<(), CoreError> {
    let name = match filename {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(CoreError::Validation("No file selected".to_string())),
    };

    if !name.to_lowercase().ends_with(".pdf") {
        return Err(CoreError::Validation(format!(
            "Only .pdf files are accepted, got '{name}'"
        )));
    }

    Ok(())
}

// ── Filename sanitization ────────────────────────────────────────────

/// Sanitize an original filename to a filesystem-safe form.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; every other character
/// (path separators, spaces, control characters, non-ASCII) becomes `_`.
/// Leading dots are stripped so the result can never be a hidden file or
/// a `..` traversal component. An input that sanitizes to nothing falls
/// back to `"upload.pdf"`.
pub fn sanitize_filename(original: &str) -> String {
    // Browsers may submit a full client path; keep only the final component.
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let mut name: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    while name.starts_with('.') {
        name.remove(0);
    }

    if name.is_empty() {
        return "upload.pdf".to_string();
    }

    name
}

/// Construct the storage filename for an uploaded book.
///
/// Convention: `{book_id}_{sanitized_original}`. The UUID prefix keeps
/// two uploads of the same document from colliding in the uploads
/// directory.
pub fn storage_filename(book_id: &str, original: &str) -> String {
    format!("{book_id}_{}", sanitize_filename(original))
}
