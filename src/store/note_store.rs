//! NoteStore: the owned application state and its only write surface.

use log::{error, info};

use super::{KeyValueStore, StoreResult, load, save};
use crate::domain::{NoteCollection, NoteFields, NoteId};

/// What part of the state a publish refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Notes were created, edited or removed. The selection may also have moved.
    Notes,
    /// Only the selection changed.
    Selection,
    /// Only the search term changed.
    Search,
}

/// State observed by subscribers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    collection: NoteCollection,
    search: String,
}

impl AppState {
    pub fn collection(&self) -> &NoteCollection {
        &self.collection
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

type Listener = Box<dyn FnMut(Change, &AppState)>;

/// Owns the note collection, the selection, the search term and the store
/// they are persisted to.
///
/// Every note mutation is saved before subscribers are told about it.
/// Selection and search changes are published but never saved. When a save
/// fails the in-memory change stands, subscribers are still notified, and the
/// error is returned to the caller.
pub struct NoteStore<S: KeyValueStore> {
    state: AppState,
    storage: S,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the collection from `storage`.
    pub fn load(storage: S) -> Self {
        let collection = load(&storage);
        Self {
            state: AppState {
                collection,
                search: String::new(),
            },
            storage,
            listeners: Vec::new(),
        }
    }

    pub fn collection(&self) -> &NoteCollection {
        &self.state.collection
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Registers a callback run after every published change.
    pub fn subscribe(&mut self, listener: impl FnMut(Change, &AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a blank note at the front and selects it.
    pub fn create(&mut self) -> StoreResult<NoteId> {
        let id = self.state.collection.create();
        info!("event=note_create id={id}");
        self.persist()?;
        Ok(id)
    }

    /// Updates note `id`. Returns `Ok(false)` without saving if it is absent.
    pub fn update(&mut self, id: &NoteId, fields: NoteFields) -> StoreResult<bool> {
        if !self.state.collection.update(id, fields) {
            return Ok(false);
        }
        info!("event=note_update id={id}");
        self.persist()?;
        Ok(true)
    }

    /// Deletes note `id`. Returns `Ok(false)` without saving if it is absent.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<bool> {
        if !self.state.collection.delete(id) {
            return Ok(false);
        }
        info!("event=note_delete id={id}");
        self.persist()?;
        Ok(true)
    }

    /// Sets the selection. Not persisted.
    pub fn select(&mut self, id: Option<NoteId>) {
        self.state.collection.select(id);
        self.publish(Change::Selection);
    }

    /// Sets the search term. Not persisted.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search = term.into();
        self.publish(Change::Search);
    }

    fn persist(&mut self) -> StoreResult<()> {
        let result = save(&mut self.storage, &self.state.collection);
        if let Err(err) = &result {
            error!("event=store_save status=failed error={err}");
        }
        self.publish(Change::Notes);
        result
    }

    fn publish(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change, &self.state);
        }
    }
}
