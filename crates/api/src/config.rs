use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. This struct is
/// passed explicitly to component constructors at startup; there is no
/// global application state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database URL (default: `sqlite://flipbook.db`, a local
    /// file-backed store; any sqlx SQLite URL works).
    pub database_url: String,
    /// Directory holding the original uploaded PDFs.
    pub upload_dir: PathBuf,
    /// Directory holding rasterized page images, nested by book id.
    pub pages_dir: PathBuf,
    /// Maximum accepted upload size in megabytes.
    pub max_upload_mb: usize,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `3000`                |
    /// | `DATABASE_URL`         | `sqlite://flipbook.db`|
    /// | `UPLOAD_DIR`           | `uploads`             |
    /// | `PAGES_DIR`            | `pages`               |
    /// | `MAX_UPLOAD_MB`        | `100`                 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://flipbook.db".into());

        let upload_dir = PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let pages_dir = PathBuf::from(std::env::var("PAGES_DIR").unwrap_or_else(|_| "pages".into()));

        let max_upload_mb: usize = std::env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("MAX_UPLOAD_MB must be a valid usize");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            upload_dir,
            pages_dir,
            max_upload_mb,
            request_timeout_secs,
        }
    }

    /// Filesystem path of a book's stored upload.
    pub fn upload_path(&self, stored_filename: &str) -> PathBuf {
        self.upload_dir.join(stored_filename)
    }

    /// Filesystem directory of a book's rasterized pages.
    pub fn book_pages_dir(&self, book_id: &str) -> PathBuf {
        self.pages_dir.join(book_id)
    }
}
