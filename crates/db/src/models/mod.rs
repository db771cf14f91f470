pub mod book;
pub mod highlight;
pub mod note;
