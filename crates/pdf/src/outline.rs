//! Table-of-contents extraction from the PDF bookmark tree.
//!
//! TOC extraction is a best-effort feature: the viewer renders fine
//! without one, so every failure path here degrades to an empty list
//! instead of surfacing to the caller.

use std::path::Path;

use pdfium_render::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::error::PdfError;

/// One flattened outline entry: nesting level (1 = top level), title,
/// and 1-indexed target page where the bookmark resolves to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub level: u32,
    pub title: String,
    pub page: Option<u32>,
}

/// Extract the table of contents of `pdf_path`, swallowing all errors.
///
/// This is the entry point the viewer uses; it must never fail the page
/// view, so an unreadable document or a pdfium binding problem just logs
/// a warning and yields an empty list.
pub async fn extract_toc_or_empty(pdf_path: &Path) -> Vec<TocEntry> {
    match extract_toc(pdf_path).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %pdf_path.display(), error = %e, "TOC extraction failed");
            Vec::new()
        }
    }
}

/// Extract the table of contents, reporting failures.
pub async fn extract_toc(pdf_path: &Path) -> Result<Vec<TocEntry>, PdfError> {
    let pdf_path = pdf_path.to_path_buf();

    tokio::task::spawn_blocking(move || extract_toc_blocking(&pdf_path))
        .await
        .map_err(|e| PdfError::TaskJoin(e.to_string()))?
}

/// Blocking implementation: depth-first walk over the bookmark tree.
fn extract_toc_blocking(pdf_path: &Path) -> Result<Vec<TocEntry>, PdfError> {
    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| PdfError::Open {
            path: pdf_path.to_path_buf(),
            detail: format!("{e:?}"),
        })?;

    let mut entries = Vec::new();

    if let Some(root) = document.bookmarks().root() {
        // The root node is a container; real entries start at its children.
        let mut child = root.first_child();
        while let Some(bookmark) = child {
            flatten_bookmark(&bookmark, 1, &mut entries);
            child = bookmark.next_sibling();
        }
    }

    Ok(entries)
}

fn flatten_bookmark(bookmark: &PdfBookmark, level: u32, entries: &mut Vec<TocEntry>) {
    let title = bookmark.title().unwrap_or_default();

    if !title.is_empty() {
        entries.push(TocEntry {
            level,
            title,
            page: bookmark_target_page(bookmark),
        });
    }

    let mut child = bookmark.first_child();
    while let Some(ref inner) = child {
        flatten_bookmark(inner, level + 1, entries);
        child = inner.next_sibling();
    }
}

/// Resolve a bookmark's 1-indexed target page, if it has a local
/// go-to action with a usable destination.
fn bookmark_target_page(bookmark: &PdfBookmark) -> Option<u32> {
    let action = bookmark.action()?;
    let destination = action.as_local_destination_action()?.destination().ok()?;
    let index = destination.page_index().ok()?;
    Some(index as u32 + 1)
}
