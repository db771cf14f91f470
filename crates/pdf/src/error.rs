use std::path::PathBuf;

/// Errors from the pdfium-backed rendering layer.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// The document could not be opened (missing, corrupt, or encrypted).
    #[error("Failed to open PDF {path}: {detail}")]
    Open { path: PathBuf, detail: String },

    /// A single page failed to rasterize.
    #[error("Failed to rasterize page {page}: {detail}")]
    Rasterize { page: usize, detail: String },

    /// Writing a rendered page image to disk failed.
    #[error("Failed to write page image {path}: {detail}")]
    WriteImage { path: PathBuf, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking render task panicked or was cancelled.
    #[error("Render task failed: {0}")]
    TaskJoin(String),
}
