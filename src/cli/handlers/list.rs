//! List and search command handlers.

use anyhow::Result;
use chrono::Locale;

use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;
use crate::store::{KeyValueStore, NoteStore};
use crate::view::{NO_MATCHES_MESSAGE, filter_notes, format_short, truncate_title};

pub fn handle_list<S: KeyValueStore>(
    args: &ListArgs,
    store: &NoteStore<S>,
    locale: Locale,
) -> Result<()> {
    let notes: Vec<&Note> = store.collection().iter().collect();
    print_notes(&notes, args.format, locale, "No notes yet.")
}

pub fn handle_search<S: KeyValueStore>(
    args: &SearchArgs,
    store: &NoteStore<S>,
    locale: Locale,
) -> Result<()> {
    let notes = filter_notes(store.collection().notes(), &args.query);
    print_notes(&notes, args.format, locale, NO_MATCHES_MESSAGE)
}

fn print_notes(notes: &[&Note], format: OutputFormat, locale: Locale, empty: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("{empty}");
            } else {
                print!("{}", render_listing(notes, locale));
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(|n| NoteListing::from(*n)).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Formats notes as a table with a trailing count line.
pub(crate) fn render_listing(notes: &[&Note], locale: Locale) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10}  {:<33}  {}\n", "ID", "Title", "Edited"));
    out.push_str(&format!(
        "{:<10}  {:<33}  {}\n",
        "-".repeat(10),
        "-".repeat(33),
        "-".repeat(13)
    ));

    for note in notes {
        out.push_str(&format!(
            "{:<10}  {:<33}  {}\n",
            note.id().prefix(),
            truncate_title(note.title()),
            format_short(note.last_edited(), locale)
        ));
    }

    out.push('\n');
    out.push_str(&format!("{} note(s)\n", notes.len()));
    out
}
