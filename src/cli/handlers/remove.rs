//! Remove command handler.

use anyhow::Result;
use log::info;

use super::resolve::resolve_id;
use super::saved;
use crate::cli::RmArgs;
use crate::store::{KeyValueStore, NoteStore};

pub fn handle_rm<S: KeyValueStore>(args: &RmArgs, store: &mut NoteStore<S>) -> Result<()> {
    let id = resolve_id(store.collection(), &args.note)?;
    let label = store
        .collection()
        .get(&id)
        .map(|n| n.to_string())
        .unwrap_or_default();

    if saved(store.delete(&id))? {
        info!("event=cli_rm id={id}");
        println!("Deleted: {label}");
    }
    Ok(())
}
