//! The view model rendered by the terminal UI.

use chrono::Locale;

use super::filter::{active_note, filter_notes};
use super::format::{format_full, format_short, truncate_title};
use crate::domain::{NoteCollection, NoteId};

/// Shown in the sidebar when there are no notes at all.
pub const NO_NOTES_MESSAGE: &str = "No notes yet. Press Ctrl-N to add one!";

/// Shown in the sidebar when the search matches nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching notes.";

/// Shown in the editor pane when no note is active.
pub const EMPTY_EDITOR_MESSAGE: &str = "Select or create a note on the left.";

/// One row of the sidebar list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub edited: String,
    pub is_active: bool,
}

/// The note open in the editor pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDetail {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    pub edited: String,
}

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub search: String,
    pub rows: Vec<NoteRow>,
    pub active: Option<NoteDetail>,
    pub empty_message: Option<&'static str>,
}

impl ViewModel {
    /// Derives the view from the collection, selection and search term.
    pub fn derive(collection: &NoteCollection, search: &str, locale: Locale) -> Self {
        let selected = collection.selected();
        let rows: Vec<NoteRow> = filter_notes(collection.notes(), search)
            .into_iter()
            .map(|note| NoteRow {
                id: note.id().clone(),
                title: truncate_title(note.title()),
                edited: format_short(note.last_edited(), locale),
                is_active: selected == Some(note.id()),
            })
            .collect();

        let empty_message = match (rows.is_empty(), collection.is_empty()) {
            (false, _) => None,
            (true, true) => Some(NO_NOTES_MESSAGE),
            (true, false) => Some(NO_MATCHES_MESSAGE),
        };

        let active = active_note(collection).map(|note| NoteDetail {
            id: note.id().clone(),
            title: note.title().to_string(),
            body: note.body().to_string(),
            edited: format_full(note.last_edited(), locale),
        });

        Self {
            search: search.to_string(),
            rows,
            active,
            empty_message,
        }
    }

    /// Returns the position of the active note within the displayed rows.
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.is_active)
    }
}
