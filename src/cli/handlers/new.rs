//! New note command handler.

use anyhow::{Result, bail};
use log::info;

use super::saved;
use crate::cli::NewArgs;
use crate::domain::{NoteFields, TITLE_MAX_CHARS};
use crate::store::{KeyValueStore, NoteStore};

/// Builds the field update for `--title`/`--body` flags.
///
/// # Errors
///
/// Returns an error if the title is longer than [`TITLE_MAX_CHARS`].
pub fn fields_from_args(title: Option<&str>, body: Option<&str>) -> Result<NoteFields> {
    if let Some(title) = title {
        let len = title.chars().count();
        if len > TITLE_MAX_CHARS {
            bail!("title is {len} characters long; the limit is {TITLE_MAX_CHARS}");
        }
    }
    Ok(NoteFields {
        title: title.map(str::to_string),
        body: body.map(str::to_string),
    })
}

/// Creates a note, applies any given fields and prints the new id.
pub fn handle_new<S: KeyValueStore>(args: &NewArgs, store: &mut NoteStore<S>) -> Result<()> {
    let fields = fields_from_args(args.title.as_deref(), args.body.as_deref())?;

    let id = saved(store.create())?;
    if !fields.is_empty() {
        saved(store.update(&id, fields))?;
    }

    info!("event=cli_new id={id}");
    println!("{id}");
    Ok(())
}
