//! Builder for test notes with sensible defaults.

// Allow dead code since not every test file uses every builder method
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use notepad::domain::{Note, NoteId};

/// Builder for creating test notes with sensible defaults.
///
/// Generates an ID and uses a fixed edit time, with a fluent API
/// for the remaining fields.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: NoteId,
    title: String,
    body: String,
    last_edited: DateTime<Utc>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            body: String::new(),
            last_edited: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .expect("valid timestamp")
                .with_timezone(&Utc),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the last-edited timestamp from an RFC 3339 string.
    pub fn edited(mut self, rfc3339: &str) -> Self {
        self.last_edited = DateTime::parse_from_rfc3339(rfc3339)
            .expect("Invalid timestamp")
            .with_timezone(&Utc);
        self
    }

    /// Returns the full ID.
    pub fn get_id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> &str {
        self.id.prefix()
    }

    /// Builds the domain note.
    pub fn to_note(&self) -> Note {
        Note::new(
            self.id.clone(),
            self.title.clone(),
            self.body.clone(),
            self.last_edited,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Defaults").to_note();
        assert_eq!(note.title(), "Defaults");
        assert_eq!(note.body(), "");
        assert_eq!(note.id().as_str().len(), 26);
    }

    #[test]
    fn test_note_explicit_fields() {
        let note = TestNote::new("Explicit")
            .id("1718000000000")
            .body("text")
            .edited("2024-06-10T06:13:20Z");
        assert_eq!(note.get_id(), "1718000000000");
        assert_eq!(note.id_prefix(), "1718000000");
        assert_eq!(note.to_note().body(), "text");
    }
}
