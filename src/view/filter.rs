//! Search filtering and active-note resolution.

use crate::domain::{Note, NoteCollection};

/// Returns the notes to display for a search term.
///
/// A term that is empty after trimming shows every note in collection order.
/// Otherwise a note is shown when its title or body contains the term,
/// compared case-insensitively. Order is preserved.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    if term.trim().is_empty() {
        return notes.iter().collect();
    }

    let needle = term.to_lowercase();
    notes
        .iter()
        .filter(|n| {
            n.title().to_lowercase().contains(&needle) || n.body().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Resolves the selection against the full collection, ignoring any filter.
pub fn active_note(collection: &NoteCollection) -> Option<&Note> {
    collection.selected_note()
}
