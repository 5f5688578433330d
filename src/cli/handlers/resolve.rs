//! Note resolution utilities.

use anyhow::{Result, bail};

use crate::domain::{Note, NoteCollection, NoteId};

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier to help pick one.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.title());
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier to a unique note.
///
/// Resolution order:
/// 1. Exact ID match
/// 2. ID prefix match (case-insensitive)
///
/// Returns `Unique` if exactly one note matches, `Ambiguous` if several
/// notes share the prefix, or `NotFound` if nothing matches.
pub fn resolve_note<'a>(collection: &'a NoteCollection, identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(note) = collection.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(note);
    }

    let mut matches = collection.find_by_prefix(identifier);
    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.remove(0)),
        _ => ResolveResult::Ambiguous(matches),
    }
}

/// Resolves `identifier` or fails with a user-facing error.
pub(crate) fn resolve_id(collection: &NoteCollection, identifier: &str) -> Result<NoteId> {
    match resolve_note(collection, identifier) {
        ResolveResult::Unique(note) => Ok(note.id().clone()),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => {
            bail!("note not found: '{}'", identifier);
        }
    }
}
