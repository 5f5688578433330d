//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub last_edited: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().to_string(),
            title: note.title().to_string(),
            last_edited: note
                .last_edited()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// A full note in `show` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDocument {
    pub id: String,
    pub title: String,
    pub body: String,
    pub last_edited: String,
}

impl From<&Note> for NoteDocument {
    fn from(note: &Note) -> Self {
        let listing = NoteListing::from(note);
        Self {
            id: listing.id,
            title: listing.title,
            body: note.body().to_string(),
            last_edited: listing.last_edited,
        }
    }
}
