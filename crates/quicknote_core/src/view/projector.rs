//! View projector.
//!
//! # Responsibility
//! - Apply the category filter and search substring conjunctively.
//! - Build `DisplayNote` projections for renderers.
//!
//! # Invariants
//! - Search is case-insensitive on both sides.
//! - Filtering is a single linear scan with no index.

use crate::model::criteria::ViewCriteria;
use crate::model::note::{Note, NoteId};
use serde::Serialize;

/// Handle a renderer attaches to a note's delete control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteAction {
    pub note_id: NoteId,
}

/// Render-ready projection of one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    /// Category name as shown on the badge.
    pub category_label: String,
    /// Style hook for the badge, `category-<name>`.
    pub category_class: String,
    /// Creation date string.
    pub date: String,
    /// Raw note text for plain-text surfaces.
    pub text: String,
    /// Markup-safe note text.
    pub escaped_text: String,
    pub delete_action: DeleteAction,
}

/// Returns notes passing both the category filter and the search test.
pub fn visible_notes<'a>(notes: &'a [Note], criteria: &ViewCriteria) -> Vec<&'a Note> {
    let needle = criteria.search_text.to_lowercase();
    notes
        .iter()
        .filter(|note| is_visible(note, criteria, &needle))
        .collect()
}

/// Returns `true` when no note passes the criteria.
pub fn empty_state_indicator(notes: &[Note], criteria: &ViewCriteria) -> bool {
    let needle = criteria.search_text.to_lowercase();
    !notes
        .iter()
        .any(|note| is_visible(note, criteria, &needle))
}

/// Projects one note for presentation.
pub fn to_display_model(note: &Note) -> DisplayNote {
    let category = note.category().as_str();
    DisplayNote {
        category_label: category.to_string(),
        category_class: format!("category-{category}"),
        date: note.created_date().to_string(),
        text: note.text().to_string(),
        escaped_text: escape_html(note.text()),
        delete_action: DeleteAction { note_id: note.id() },
    }
}

/// Escapes text for safe inclusion in markup content or attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn is_visible(note: &Note, criteria: &ViewCriteria, lowered_needle: &str) -> bool {
    criteria.active_filter.matches(note.category())
        && (lowered_needle.is_empty() || note.text().to_lowercase().contains(lowered_needle))
}
