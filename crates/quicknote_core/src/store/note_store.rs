//! In-memory note store.
//!
//! # Responsibility
//! - Create notes from raw input and prepend them to the collection.
//! - Delete notes by id.
//!
//! # Invariants
//! - Collection order is newest-first; filtering never reorders it.
//! - Ids are strictly increasing even when the clock stalls or goes back.
//! - Whitespace-only input never creates a note.

use crate::model::note::{Category, Note, NoteId};
use crate::store::clock::{format_created_date, Clock, SystemClock};
use log::debug;

/// Hands out timestamp-derived ids with a monotonic tiebreak.
#[derive(Debug, Default)]
struct IdAllocator {
    last: Option<u64>,
}

impl IdAllocator {
    fn next(&mut self, now_millis: i64) -> NoteId {
        // Pre-epoch clocks clamp to zero and rely on the tiebreak.
        let candidate = u64::try_from(now_millis).unwrap_or(0);
        let raw = match self.last {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last = Some(raw);
        NoteId::new(raw)
    }
}

/// Owns the session's note collection.
pub struct NoteStore<C: Clock = SystemClock> {
    notes: Vec<Note>,
    ids: IdAllocator,
    clock: C,
}

impl NoteStore<SystemClock> {
    /// Creates an empty store backed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NoteStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NoteStore<C> {
    /// Creates an empty store using the provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            notes: Vec::new(),
            ids: IdAllocator::default(),
            clock,
        }
    }

    /// Creates a note at the head of the collection.
    ///
    /// Returns `None` without mutating anything when `text` is empty after
    /// trimming. Callers must not assume a note was created.
    pub fn add(&mut self, text: &str, category: Category) -> Option<Note> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=note_add module=store status=skipped reason=empty_text");
            return None;
        }

        let id = self.ids.next(self.clock.now_millis());
        let created_date = format_created_date(self.clock.today());
        let note = Note::new(id, text.to_string(), category, created_date);
        self.notes.insert(0, note.clone());

        debug!(
            "event=note_add module=store status=ok note_id={} category={} total={}",
            id,
            note.category(),
            self.notes.len()
        );
        Some(note)
    }

    /// Removes the note with `id`; returns whether a removal happened.
    ///
    /// An absent id is a no-op, not an error.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id() != id);
        let removed = self.notes.len() != before;

        debug!(
            "event=note_delete module=store status={} note_id={} total={}",
            if removed { "ok" } else { "not_found" },
            id,
            self.notes.len()
        );
        removed
    }

    /// Returns notes newest-first.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
