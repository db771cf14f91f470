/// Note and highlight primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Book identifiers are externally generated UUID v4 strings.
pub type BookId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
