//! PDF rasterization: render every page to a JPEG file via pdfium.
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which is not
//! safe to call from async contexts, so the actual rendering runs inside
//! `tokio::task::spawn_blocking`. A large document blocks one blocking-pool
//! thread for the duration of the conversion, never a Tokio worker thread.

use std::fs;
use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;
use tracing::{debug, info};

use crate::error::PdfError;

/// Fixed rasterization scale: every page is rendered at 2x its nominal
/// size so the flipbook stays sharp when zoomed.
pub const PAGE_SCALE_FACTOR: f32 = 2.0;

/// Rasterize every page of `pdf_path` into `pages_dir`.
///
/// Page images are written as `page_{n}.jpg` with `n` 1-indexed; the
/// directory is created if needed. Returns the number of pages written.
pub async fn rasterize_to_dir(pdf_path: &Path, pages_dir: &Path) -> Result<usize, PdfError> {
    let pdf_path = pdf_path.to_path_buf();
    let pages_dir = pages_dir.to_path_buf();

    tokio::task::spawn_blocking(move || rasterize_blocking(&pdf_path, &pages_dir))
        .await
        .map_err(|e| PdfError::TaskJoin(e.to_string()))?
}

/// Blocking implementation of page rasterization.
fn rasterize_blocking(pdf_path: &Path, pages_dir: &Path) -> Result<usize, PdfError> {
    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| PdfError::Open {
            path: pdf_path.to_path_buf(),
            detail: format!("{e:?}"),
        })?;

    let pages = document.pages();
    let page_count = pages.len() as usize;
    info!(path = %pdf_path.display(), page_count, "PDF loaded for rasterization");

    fs::create_dir_all(pages_dir)?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(PAGE_SCALE_FACTOR);

    for index in 0..page_count {
        let page = pages.get(index as u16).map_err(|e| PdfError::Rasterize {
            page: index + 1,
            detail: format!("{e:?}"),
        })?;

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PdfError::Rasterize {
                page: index + 1,
                detail: format!("{e:?}"),
            })?;

        // Pages are 0-indexed internally but image files are 1-indexed.
        let image_path = page_image_path(pages_dir, index + 1);
        let image = bitmap.as_image();

        // JPEG has no alpha channel; flatten before encoding.
        image
            .to_rgb8()
            .save(&image_path)
            .map_err(|e| PdfError::WriteImage {
                path: image_path.clone(),
                detail: e.to_string(),
            })?;

        debug!(
            page = index + 1,
            width = image.width(),
            height = image.height(),
            path = %image_path.display(),
            "Rasterized page"
        );
    }

    Ok(page_count)
}

/// Path of the 1-indexed page image inside a book's pages directory.
pub fn page_image_path(pages_dir: &Path, page_number: usize) -> PathBuf {
    pages_dir.join(format!("page_{page_number}.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_image_paths_are_one_indexed() {
        let dir = Path::new("/tmp/pages/abc");
        assert_eq!(
            page_image_path(dir, 1),
            Path::new("/tmp/pages/abc/page_1.jpg")
        );
        assert_eq!(
            page_image_path(dir, 42),
            Path::new("/tmp/pages/abc/page_42.jpg")
        );
    }

    // `Pdfium::default()` itself needs the library to bind.
    #[tokio::test]
    #[ignore = "requires pdfium"]
    async fn open_error_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = rasterize_to_dir(
            Path::new("/definitely/not/here.pdf"),
            &dir.path().join("pages"),
        )
        .await;
        assert!(matches!(result, Err(PdfError::Open { .. })));
    }

    // Requires a pdfium system library; exercised manually and in
    // environments that ship libpdfium.
    #[tokio::test]
    #[ignore = "requires pdfium"]
    async fn rasterizes_minimal_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let pdf_path = dir.path().join("one_page.pdf");
        std::fs::write(&pdf_path, minimal_one_page_pdf()).unwrap();

        let pages_dir = dir.path().join("pages");
        let count = rasterize_to_dir(&pdf_path, &pages_dir).await.unwrap();

        assert_eq!(count, 1);
        assert!(page_image_path(&pages_dir, 1).exists());
        assert!(!page_image_path(&pages_dir, 2).exists());
    }

    /// A syntactically complete single blank-page PDF.
    fn minimal_one_page_pdf() -> Vec<u8> {
        b"%PDF-1.4\n\
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n\
2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj\n\
3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >> endobj\n\
trailer << /Root 1 0 R >>\n\
%%EOF\n"
            .to_vec()
    }
}
