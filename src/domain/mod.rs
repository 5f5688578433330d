//! Core types: Note, NoteId, NoteCollection

mod collection;
mod note;
mod note_id;

pub use collection::NoteCollection;
pub use note::{DEFAULT_TITLE, Note, NoteFields, TITLE_MAX_CHARS};
pub use note_id::{NoteId, ParseNoteIdError};
