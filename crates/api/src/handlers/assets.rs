//! Embedded frontend assets.
//!
//! The upload form, viewer script, and stylesheet are compiled into the
//! binary so the service has no runtime dependency on a static directory;
//! only the rasterized page images are served from disk.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// GET /
///
/// The upload form.
pub async fn upload_page() -> Html<&'static str> {
    Html(include_str!("../../static/upload.html"))
}

/// GET /static/js/flipbook.js
pub async fn flipbook_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/js/flipbook.js"),
    )
}

/// GET /static/css/flipbook.css
pub async fn flipbook_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/css/flipbook.css"),
    )
}
