//! Derived view data: filtering, truncation, timestamp display.
//!
//! Everything here is computed from the note collection, the selection and
//! the search term. Nothing in this module mutates state.

mod filter;
mod format;
mod model;

pub use filter::{active_note, filter_notes};
pub use format::{
    FULL_FORMAT, SHORT_FORMAT, format_full, format_full_in, format_short, format_short_in,
    parse_locale, truncate_title,
};
pub use model::{
    EMPTY_EDITOR_MESSAGE, NO_MATCHES_MESSAGE, NO_NOTES_MESSAGE, NoteDetail, NoteRow, ViewModel,
};
