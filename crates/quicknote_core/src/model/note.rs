//! Note domain model.
//!
//! # Responsibility
//! - Define the immutable note record created by the store.
//! - Provide typed wrappers for note identity and category.
//!
//! # Invariants
//! - `text` is trimmed and never empty.
//! - `created_date` is fixed at creation and never recomputed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable deletion handle for a note.
///
/// Derived from creation time in epoch milliseconds, with a monotonic
/// tiebreak so two notes never share an id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Category tag attached to a note.
///
/// The set of valid names is configuration (see `config::CategorySet`);
/// this type only carries the name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Immutable note record.
///
/// Fields are private so a note can only be built by the store, which
/// enforces the trimmed/non-empty text rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    text: String,
    category: Category,
    created_date: String,
}

impl Note {
    pub(crate) fn new(id: NoteId, text: String, category: Category, created_date: String) -> Self {
        Self {
            id,
            text,
            category,
            created_date,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Calendar date captured at creation, e.g. `Jan 5, 2024`.
    pub fn created_date(&self) -> &str {
        &self.created_date
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Note, NoteId};

    #[test]
    fn note_id_parses_trimmed_integer() {
        let id: NoteId = " 1704447000000 ".parse().expect("id should parse");
        assert_eq!(id.get(), 1_704_447_000_000);
        assert_eq!(id.to_string(), "1704447000000");
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn note_serializes_with_flat_id_and_category() {
        let note = Note::new(
            NoteId::new(7),
            "Buy milk".to_string(),
            Category::from("personal"),
            "Jan 5, 2024".to_string(),
        );

        let json = serde_json::to_value(&note).expect("note should serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "personal");
        assert_eq!(json["created_date"], "Jan 5, 2024");
        assert_eq!(json["text"], "Buy milk");
    }
}
