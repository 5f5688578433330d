//! Note struct: a title/body pair with an edit timestamp.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to notes created without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Longest title the editors accept, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// A single user note.
///
/// The serialized form uses camelCase keys (`id`, `title`, `body`,
/// `lastEdited`) with `lastEdited` as an RFC 3339 UTC timestamp. Unknown keys
/// are ignored when reading.
///
/// # Examples
///
/// ```
/// use notepad::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let note = Note::new(NoteId::generate(), "Groceries", "eggs, milk", Utc::now());
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.body(), "eggs, milk");
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    body: String,
    #[serde(with = "iso_millis")]
    last_edited: DateTime<Utc>,
}

impl Note {
    /// Creates a note with all fields given.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
        last_edited: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            last_edited,
        }
    }

    /// Creates a blank note with the default title and an empty body.
    pub fn blank(id: NoteId, now: DateTime<Utc>) -> Self {
        Self::new(id, DEFAULT_TITLE, "", now)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the note was last edited.
    pub fn last_edited(&self) -> DateTime<Utc> {
        self.last_edited
    }

    /// Applies the given fields and stamps the note as edited at `now`.
    ///
    /// The timestamp is refreshed even when `fields` is empty.
    pub(crate) fn apply(&mut self, fields: NoteFields, now: DateTime<Utc>) {
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(body) = fields.body {
            self.body = body;
        }
        self.last_edited = now;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("last_edited", &self.last_edited)
            .finish()
    }
}

/// A partial update to a note. Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NoteFields {
    /// An update that replaces only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: None,
        }
    }

    /// An update that replaces only the body.
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: Some(body.into()),
        }
    }

    /// Adds a body replacement to this update.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns true if no field would be replaced.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// Serde adapter writing timestamps as `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Reading also accepts timestamps without an offset, taken as UTC.
mod iso_millis {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match DateTime::parse_from_rfc3339(&s) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(err) => NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
                .map_err(|_| serde::de::Error::custom(err)),
        }
    }
}
