//! Domain model for the note board.
//!
//! # Responsibility
//! - Define the note record and its identity/category value types.
//! - Define the transient view criteria applied by the projector.
//!
//! # Invariants
//! - Every note is identified by a unique `NoteId`.
//! - Notes are immutable after creation; there is no edit path.

pub mod criteria;
pub mod note;
