//! Note board event service.
//!
//! # Responsibility
//! - Own the store, the view criteria and the configured category set.
//! - Apply one UI event at a time and recompute the view after each.
//!
//! # Invariants
//! - The visible list is recomputed on every event; nothing is cached.
//! - Search text is stored lower-cased.
//! - At most one filter button is active, and exactly one whenever the
//!   active filter is `all` or a configured category.

use crate::config::CategorySet;
use crate::model::criteria::{Filter, ViewCriteria};
use crate::model::note::{Category, NoteId};
use crate::store::clock::{Clock, SystemClock};
use crate::store::note_store::NoteStore;
use crate::view::projector::{empty_state_indicator, to_display_model, visible_notes, DisplayNote};
use log::debug;
use serde::Serialize;

/// Discrete UI event handled by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Add clicked or Enter pressed in the input.
    Add { text: String, category: Category },
    /// Delete clicked on a note card.
    Delete(NoteId),
    /// Search input changed.
    SearchChanged(String),
    /// Filter button activated.
    FilterSelected(Filter),
}

/// What a handled event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOutcome {
    Added(NoteId),
    /// Input was empty after trimming; nothing changed.
    AddIgnored,
    Deleted(NoteId),
    /// No note had this id; nothing changed.
    DeleteMissed(NoteId),
    CriteriaChanged,
}

/// Selectable filter with its exclusive active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub filter: Filter,
    pub active: bool,
}

/// Render-ready snapshot of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub notes: Vec<DisplayNote>,
    pub empty_state: bool,
    pub active_filter: Filter,
    pub search_text: String,
    pub filters: Vec<FilterButton>,
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub outcome: BoardOutcome,
    pub view: BoardView,
}

/// Event façade over one session's store and criteria.
pub struct NoteBoard<C: Clock = SystemClock> {
    store: NoteStore<C>,
    criteria: ViewCriteria,
    categories: CategorySet,
}

impl NoteBoard<SystemClock> {
    pub fn new(categories: CategorySet) -> Self {
        Self::with_clock(categories, SystemClock)
    }
}

impl<C: Clock> NoteBoard<C> {
    pub fn with_clock(categories: CategorySet, clock: C) -> Self {
        Self {
            store: NoteStore::with_clock(clock),
            criteria: ViewCriteria::default(),
            categories,
        }
    }

    /// Applies one event and returns the recomputed view.
    pub fn handle(&mut self, event: BoardEvent) -> BoardUpdate {
        let outcome = match event {
            BoardEvent::Add { text, category } => match self.store.add(&text, category) {
                Some(note) => BoardOutcome::Added(note.id()),
                None => BoardOutcome::AddIgnored,
            },
            BoardEvent::Delete(id) => {
                if self.store.delete(id) {
                    BoardOutcome::Deleted(id)
                } else {
                    BoardOutcome::DeleteMissed(id)
                }
            }
            BoardEvent::SearchChanged(text) => {
                self.criteria.search_text = text.to_lowercase();
                BoardOutcome::CriteriaChanged
            }
            BoardEvent::FilterSelected(filter) => {
                debug!(
                    "event=filter_select module=board status=ok filter={} known={}",
                    filter,
                    self.is_known_filter(&filter)
                );
                self.criteria.active_filter = filter;
                BoardOutcome::CriteriaChanged
            }
        };

        BoardUpdate {
            outcome,
            view: self.view(),
        }
    }

    /// Computes the current view from store contents and criteria.
    pub fn view(&self) -> BoardView {
        let visible = visible_notes(self.store.list(), &self.criteria);
        let notes = visible.into_iter().map(to_display_model).collect();
        BoardView {
            notes,
            empty_state: empty_state_indicator(self.store.list(), &self.criteria),
            active_filter: self.criteria.active_filter.clone(),
            search_text: self.criteria.search_text.clone(),
            filters: self.filter_buttons(),
        }
    }

    pub fn store(&self) -> &NoteStore<C> {
        &self.store
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    fn filter_buttons(&self) -> Vec<FilterButton> {
        std::iter::once(Filter::All)
            .chain(self.categories.iter().cloned().map(Filter::Category))
            .map(|filter| FilterButton {
                active: filter == self.criteria.active_filter,
                filter,
            })
            .collect()
    }

    fn is_known_filter(&self, filter: &Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Category(category) => self.categories.contains(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardEvent, BoardOutcome, NoteBoard};
    use crate::config::CategorySet;
    use crate::model::criteria::Filter;
    use crate::store::clock::FixedClock;
    use chrono::NaiveDate;

    fn board() -> NoteBoard<FixedClock> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        NoteBoard::with_clock(CategorySet::default(), FixedClock::new(1_000, date))
    }

    #[test]
    fn search_text_is_stored_lowercased() {
        let mut board = board();
        let update = board.handle(BoardEvent::SearchChanged("MiLk".to_string()));
        assert_eq!(update.outcome, BoardOutcome::CriteriaChanged);
        assert_eq!(board.criteria().search_text, "milk");
        assert_eq!(update.view.search_text, "milk");
    }

    #[test]
    fn initial_view_has_all_filter_active_and_empty_state() {
        let view = board().view();
        assert!(view.empty_state);
        assert!(view.notes.is_empty());
        assert_eq!(view.filters.len(), 4);
        assert!(view.filters[0].active);
        assert_eq!(view.filters[0].filter, Filter::All);
        assert_eq!(view.filters.iter().filter(|button| button.active).count(), 1);
    }
}
