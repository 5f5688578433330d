//! Opaque note identifier with ULID generation and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use ulid::Ulid;

/// Number of characters shown when an ID is abbreviated.
const PREFIX_LEN: usize = 10;

/// A unique identifier for a note.
///
/// Freshly generated IDs are ULIDs: 26-character Crockford Base32 strings made
/// of a millisecond timestamp and 80 random bits. IDs read back from storage
/// are treated as opaque strings, so stores written by older versions (which
/// used millisecond timestamps such as `"1718000000000"`) still load.
///
/// # Examples
///
/// ```
/// use notepad::domain::NoteId;
///
/// let id = NoteId::generate();
/// assert_eq!(id.as_str().len(), 26);
///
/// let legacy: NoteId = "1718000000000".parse().unwrap();
/// assert_eq!(legacy.as_str(), "1718000000000");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a new ULID-based identifier.
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the abbreviated form of the ID used in listings.
    ///
    /// For ULIDs the first 10 characters encode the full 48-bit timestamp.
    /// Shorter IDs are returned whole.
    pub fn prefix(&self) -> &str {
        match self.0.char_indices().nth(PREFIX_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Returns true if this ID starts with the given prefix (case-insensitive).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid note identifier.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: &'static str,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot be empty",
            });
        }
        if s.trim() != s {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot have surrounding whitespace",
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn generate_creates_valid_ulid() {
        let id = NoteId::generate();
        let s = id.to_string();
        assert_eq!(s.len(), 26, "ULID should be 26 characters");
        assert!(
            Ulid::from_string(&s).is_ok(),
            "generated id should parse back as a ULID"
        );
    }

    #[test]
    fn prefix_returns_first_10_chars() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(id.prefix(), "01HQ3K5M7N");
    }

    #[test]
    fn prefix_of_short_id_is_whole_id() {
        let id: NoteId = "17180".parse().unwrap();
        assert_eq!(id.prefix(), "17180");
    }

    #[test]
    fn parse_accepts_legacy_timestamp_ids() {
        let id: NoteId = "1718000000000".parse().expect("legacy id should parse");
        assert_eq!(id.as_str(), "1718000000000");
    }

    #[test]
    fn parse_rejects_empty() {
        let err = "".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "");
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        assert!(" 01HQ".parse::<NoteId>().is_err());
        assert!("01HQ\n".parse::<NoteId>().is_err());
    }

    #[test]
    fn starts_with_is_case_insensitive() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert!(id.starts_with("01hq3k"));
        assert!(id.starts_with("01HQ3K5M7NXJK4QZPW8V2R6T9Y"));
        assert!(!id.starts_with("01HQ3K5M7NXJK4QZPW8V2R6T9YZ"));
        assert!(!id.starts_with("02"));
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: Vec<NoteId> = (0..1000).map(|_| NoteId::generate()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "all generated IDs should be unique");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: NoteId = "1718000000000".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1718000000000\"");
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let result: Result<NoteId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }
}
