//! Session-scoped note storage.
//!
//! # Responsibility
//! - Own the newest-first note collection and its mutations.
//! - Isolate wall-clock access behind an injectable `Clock`.
//!
//! # Invariants
//! - No two notes share an id.
//! - Nothing is persisted; dropping the store discards every note.

pub mod clock;
pub mod note_store;
