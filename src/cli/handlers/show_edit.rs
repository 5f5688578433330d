//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};
use chrono::Locale;
use log::info;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use super::new::fields_from_args;
use super::resolve::resolve_id;
use super::saved;
use crate::cli::config::Config;
use crate::cli::output::{NoteDocument, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::{Note, NoteFields};
use crate::store::{KeyValueStore, NoteStore};
use crate::view::{active_note, format_full};

pub fn handle_show<S: KeyValueStore>(
    args: &ShowArgs,
    store: &NoteStore<S>,
    locale: Locale,
) -> Result<()> {
    let collection = store.collection();
    let note = match &args.note {
        Some(identifier) => {
            let id = resolve_id(collection, identifier)?;
            collection.get(&id)
        }
        None => active_note(collection),
    };
    let Some(note) = note else {
        bail!("no notes yet; create one with `notes new`");
    };

    match args.format {
        OutputFormat::Human => print!("{}", render_note(note, locale)),
        OutputFormat::Json => {
            let output = Output::new(NoteDocument::from(note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Formats a note as a heading, a metadata line and the body.
pub(crate) fn render_note(note: &Note, locale: Locale) -> String {
    let mut out = format!(
        "# {}\n\nID: {}  Last edited: {}\n",
        note.title(),
        note.id(),
        format_full(note.last_edited(), locale)
    );
    if !note.body().is_empty() {
        out.push('\n');
        out.push_str(note.body());
        if !note.body().ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<S: KeyValueStore, E: EditorLauncher>(
    args: &EditArgs,
    store: &mut NoteStore<S>,
    editor: &E,
) -> Result<()> {
    let id = resolve_id(store.collection(), &args.note)?;

    let fields = if args.title.is_none() && args.body.is_none() {
        let Some(note) = store.collection().get(&id) else {
            bail!("note not found: '{}'", args.note);
        };
        match edit_body(note.body(), editor)? {
            Some(body) => NoteFields::body(body),
            None => {
                println!("Unchanged: {note}");
                return Ok(());
            }
        }
    } else {
        fields_from_args(args.title.as_deref(), args.body.as_deref())?
    };

    saved(store.update(&id, fields))?;

    if let Some(note) = store.collection().get(&id) {
        info!("event=cli_edit id={id}");
        println!("Edited: {note}");
    }
    Ok(())
}

/// Round-trips `body` through the editor via a temporary file.
///
/// Returns `None` when the text comes back unchanged. A single trailing
/// newline added by the editor is dropped if the original had none.
fn edit_body<E: EditorLauncher>(body: &str, editor: &E) -> Result<Option<String>> {
    let mut file = tempfile::Builder::new()
        .prefix("note-")
        .suffix(".md")
        .tempfile()
        .context("failed to create temporary file")?;
    file.write_all(body.as_bytes())
        .and_then(|()| file.flush())
        .context("failed to write temporary file")?;

    editor.open(file.path())?;

    let mut edited = std::fs::read_to_string(file.path())
        .context("failed to read note after editing")?;
    if !body.ends_with('\n') && edited.ends_with('\n') {
        edited.pop();
        if edited.ends_with('\r') {
            edited.pop();
        }
    }

    Ok((edited != body).then_some(edited))
}

/// Opens a file in the user's configured editor.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

pub fn handle_edit<S: KeyValueStore>(
    args: &EditArgs,
    store: &mut NoteStore<S>,
    config: &Config,
) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path) -> Result<()> {
            open_in_editor(path, self.0)
        }
    }
    handle_edit_impl(args, store, &RealEditor(config))
}
