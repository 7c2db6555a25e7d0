//! Core domain logic for QuickNote.
//! This crate is the single source of truth for note board invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use config::{load_category_set, CategorySet, ConfigError, NotesConfig, DEFAULT_CATEGORIES};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::criteria::{Filter, ViewCriteria, ALL_FILTER_TOKEN};
pub use model::note::{Category, Note, NoteId};
pub use service::board::{
    BoardEvent, BoardOutcome, BoardUpdate, BoardView, FilterButton, NoteBoard,
};
pub use store::clock::{format_created_date, Clock, FixedClock, SystemClock};
pub use store::note_store::NoteStore;
pub use view::projector::{
    empty_state_indicator, escape_html, to_display_model, visible_notes, DeleteAction,
    DisplayNote,
};
pub use view::render::{render_html, render_text, EMPTY_STATE_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
