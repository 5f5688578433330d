//! The ordered note collection and its selection.

use crate::domain::{Note, NoteFields, NoteId};
use chrono::{DateTime, SubsecRound, Utc};
use std::collections::HashSet;

/// An ordered sequence of notes plus the currently selected note.
///
/// Invariants:
/// - No two notes share an id.
/// - New notes go to the front; nothing else reorders notes.
/// - After `delete`, a `Some` selection refers to a note in the collection.
///
/// `select` does not check existence, so a selection can dangle until the
/// next delete or create. Readers resolve it with [`NoteCollection::selected_note`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteCollection {
    notes: Vec<Note>,
    selected: Option<NoteId>,
}

impl NoteCollection {
    /// Creates an empty collection with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a collection from previously persisted notes.
    ///
    /// Later entries repeating an earlier id are dropped. The first note, if
    /// any, becomes the selection.
    pub fn restore(notes: Vec<Note>) -> Self {
        let mut seen: HashSet<NoteId> = HashSet::with_capacity(notes.len());
        let unique: Vec<Note> = notes
            .into_iter()
            .filter(|note| seen.insert(note.id().clone()))
            .collect();
        let selected = unique.first().map(|n| n.id().clone());
        Self {
            notes: unique,
            selected,
        }
    }

    /// Creates a blank note at the front and selects it.
    pub fn create(&mut self) -> NoteId {
        self.create_at(Utc::now())
    }

    /// Like [`create`](Self::create) with an explicit timestamp.
    ///
    /// Timestamps are kept at millisecond precision, the resolution they are
    /// persisted with.
    pub fn create_at(&mut self, now: DateTime<Utc>) -> NoteId {
        let id = self.fresh_id();
        self.notes
            .insert(0, Note::blank(id.clone(), now.trunc_subsecs(3)));
        self.selected = Some(id.clone());
        id
    }

    /// Replaces the given fields of note `id` and refreshes its timestamp.
    ///
    /// Returns false (and changes nothing) if no note has that id.
    pub fn update(&mut self, id: &NoteId, fields: NoteFields) -> bool {
        self.update_at(id, fields, Utc::now())
    }

    /// Like [`update`](Self::update) with an explicit timestamp, truncated to
    /// milliseconds.
    pub fn update_at(&mut self, id: &NoteId, fields: NoteFields, now: DateTime<Utc>) -> bool {
        match self.notes.iter_mut().find(|n| n.id() == id) {
            Some(note) => {
                note.apply(fields, now.trunc_subsecs(3));
                true
            }
            None => false,
        }
    }

    /// Removes note `id` and repairs the selection.
    ///
    /// The selection moves to the note before the removed one, except when
    /// the head was removed, in which case the new head is selected. An
    /// emptied collection selects nothing.
    ///
    /// Returns false (and changes nothing) if no note has that id.
    pub fn delete(&mut self, id: &NoteId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.notes.remove(idx);

        self.selected = if self.notes.is_empty() {
            None
        } else if idx == 0 {
            self.notes.first().map(|n| n.id().clone())
        } else {
            self.notes
                .get(idx - 1)
                .or_else(|| self.notes.first())
                .map(|n| n.id().clone())
        };
        true
    }

    /// Sets the selection without checking that the note exists.
    pub fn select(&mut self, id: Option<NoteId>) {
        self.selected = id;
    }

    /// Returns the selected id, which may not resolve to a note.
    pub fn selected(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// Returns the selected note, if the selection resolves.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Looks up a note by exact id.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the index of note `id`.
    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    /// Returns every note whose id starts with `prefix` (case-insensitive).
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.id().starts_with(prefix))
            .collect()
    }

    /// Returns the notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn fresh_id(&self) -> NoteId {
        loop {
            let id = NoteId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
