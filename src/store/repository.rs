//! Whole-collection load and save against a key-value store.

use log::{debug, info, warn};

use super::{KeyValueStore, StoreResult};
use crate::domain::{Note, NoteCollection};

/// The single key holding the serialized collection.
pub const NOTES_KEY: &str = "notes";

/// Reads the collection stored under [`NOTES_KEY`].
///
/// A missing, unreadable or unparsable value yields an empty collection with
/// nothing selected. Otherwise the first note is selected.
pub fn load<S: KeyValueStore>(store: &S) -> NoteCollection {
    let raw = match store.get(NOTES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=store_load status=empty reason=absent");
            return NoteCollection::new();
        }
        Err(err) => {
            warn!("event=store_load status=empty reason=read_error error={err}");
            return NoteCollection::new();
        }
    };

    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(notes) => {
            let collection = NoteCollection::restore(notes);
            info!("event=store_load status=ok count={}", collection.len());
            collection
        }
        Err(err) => {
            warn!("event=store_load status=empty reason=parse_error error={err}");
            NoteCollection::new()
        }
    }
}

/// Serializes the whole collection and overwrites [`NOTES_KEY`].
pub fn save<S: KeyValueStore>(store: &mut S, collection: &NoteCollection) -> StoreResult<()> {
    let json = serde_json::to_string(collection.notes())?;
    store.set(NOTES_KEY, &json)?;
    debug!(
        "event=store_save status=ok count={} bytes={}",
        collection.len(),
        json.len()
    );
    Ok(())
}
