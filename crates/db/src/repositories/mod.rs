mod book_repo;
mod highlight_repo;
mod note_repo;

pub use book_repo::BookRepo;
pub use highlight_repo::HighlightRepo;
pub use note_repo::NoteRepo;
