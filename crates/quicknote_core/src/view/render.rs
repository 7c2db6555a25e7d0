//! Renderers for board views.
//!
//! Both renderers take display projections only, so they stay independent
//! of store state.

use crate::view::projector::{escape_html, DisplayNote};

/// Placeholder shown when no note is visible.
pub const EMPTY_STATE_MESSAGE: &str = "No notes found. Start creating!";

/// Renders note cards for a terminal.
pub fn render_text(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return EMPTY_STATE_MESSAGE.to_string();
    }

    notes
        .iter()
        .map(|note| {
            let body = note
                .text
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "[{}] {}  #{}\n{}",
                note.category_label, note.date, note.delete_action.note_id, body
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders note cards as markup fragments.
pub fn render_html(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return format!(
            "<div class=\"empty-state\">\n    <p>{EMPTY_STATE_MESSAGE}</p>\n</div>\n"
        );
    }

    notes.iter().map(render_html_card).collect()
}

fn render_html_card(note: &DisplayNote) -> String {
    format!(
        concat!(
            "<div class=\"note-card\">\n",
            "    <div class=\"note-header\">\n",
            "        <span class=\"note-category {class}\">{label}</span>\n",
            "        <span class=\"note-date\">{date}</span>\n",
            "    </div>\n",
            "    <div class=\"note-content\">{text}</div>\n",
            "    <div class=\"note-actions\">\n",
            "        <button class=\"btn-delete\" data-note-id=\"{id}\">Delete</button>\n",
            "    </div>\n",
            "</div>\n",
        ),
        class = escape_html(&note.category_class),
        label = escape_html(&note.category_label),
        date = escape_html(&note.date),
        text = note.escaped_text,
        id = note.delete_action.note_id,
    )
}
