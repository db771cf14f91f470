//! Request handlers.
//!
//! Each submodule provides async handler functions for one surface: book
//! ingestion/viewing, notes, and highlights. Handlers delegate to the
//! repositories in `flipbook_db` and map errors via [`crate::error::AppError`].

pub mod assets;
pub mod books;
pub mod highlights;
pub mod notes;
