//! Annotation domain types and validation.
//!
//! Highlight rectangles arrive from the client in page-fraction units:
//! `x`, `y`, `width`, `height` are all fractions of the rendered page,
//! so they survive any client-side zoom level. They are persisted as a
//! serialized JSON array and must round-trip unchanged.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default highlight color: semi-transparent yellow.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "rgba(255, 255, 0, 0.3)";

/// A single highlight rectangle in page-fraction units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Validate a 1-indexed page number.
///
/// Only the lower bound is checked; the upper bound is deliberately not
/// compared against the book's page count, which may still be 0 while
/// conversion is running.
pub fn validate_page_number(page: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(format!(
            "Page number must be >= 1, got {page}"
        )));
    }
    Ok(())
}

/// Validate a submitted rectangle list.
///
/// An empty list is rejected (an upsert with no rectangles is a client
/// bug, not a delete); individual coordinates are accepted as-is so the
/// stored list round-trips exactly what the client drew.
pub fn validate_rects(rects: &[Rect]) -> Result<(), CoreError> {
    if rects.is_empty() {
        return Err(CoreError::Validation(
            "Highlight must contain at least one rectangle".to_string(),
        ));
    }
    Ok(())
}
