//! PDF capabilities: page rasterization to JPEG files and best-effort
//! table-of-contents extraction, both backed by pdfium.

mod error;
mod outline;
mod render;

pub use error::PdfError;
pub use outline::{extract_toc, extract_toc_or_empty, TocEntry};
pub use render::{rasterize_to_dir, PAGE_SCALE_FACTOR};
