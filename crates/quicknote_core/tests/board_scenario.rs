use chrono::NaiveDate;
use quicknote_core::{
    render_text, BoardEvent, BoardOutcome, Category, CategorySet, Filter, FixedClock, NoteBoard,
    EMPTY_STATE_MESSAGE,
};

fn board() -> NoteBoard<FixedClock> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    NoteBoard::with_clock(CategorySet::default(), FixedClock::new(1_000, date))
}

fn add(text: &str, category: &str) -> BoardEvent {
    BoardEvent::Add {
        text: text.to_string(),
        category: Category::from(category),
    }
}

#[test]
fn add_search_delete_scenario() {
    let mut board = board();

    let update = board.handle(add("Buy milk", "personal"));
    let BoardOutcome::Added(milk_id) = update.outcome else {
        panic!("expected note to be added, got {:?}", update.outcome);
    };
    assert_eq!(board.store().len(), 1);
    assert_eq!(update.view.notes[0].category_label, "personal");
    assert_eq!(update.view.notes[0].text, "Buy milk");

    let update = board.handle(add("Finish report", "work"));
    assert!(matches!(update.outcome, BoardOutcome::Added(_)));
    assert_eq!(board.store().len(), 2);
    assert_eq!(update.view.notes[0].text, "Finish report");

    let update = board.handle(BoardEvent::SearchChanged("milk".to_string()));
    assert_eq!(update.view.notes.len(), 1);
    assert_eq!(update.view.notes[0].delete_action.note_id, milk_id);

    let update = board.handle(BoardEvent::Delete(milk_id));
    assert_eq!(update.outcome, BoardOutcome::Deleted(milk_id));
    assert_eq!(board.store().len(), 1);
    assert_eq!(board.store().list()[0].text(), "Finish report");
    assert!(update.view.notes.is_empty());
    assert!(update.view.empty_state);
    assert_eq!(render_text(&update.view.notes), EMPTY_STATE_MESSAGE);
}

#[test]
fn empty_add_and_missing_delete_leave_state_untouched() {
    let mut board = board();
    board.handle(add("keep me", "idea"));
    let before = board.view();

    let update = board.handle(add("    ", "idea"));
    assert_eq!(update.outcome, BoardOutcome::AddIgnored);
    assert_eq!(update.view, before);

    let missing = board.store().list()[0].id().get() + 10;
    let update = board.handle(BoardEvent::Delete(quicknote_core::NoteId::new(missing)));
    assert!(matches!(update.outcome, BoardOutcome::DeleteMissed(_)));
    assert_eq!(update.view, before);
}

#[test]
fn selecting_a_filter_activates_exactly_that_button() {
    let mut board = board();
    board.handle(add("Buy milk", "personal"));
    board.handle(add("Finish report", "work"));

    let update = board.handle(BoardEvent::FilterSelected(Filter::parse("work")));
    assert_eq!(update.outcome, BoardOutcome::CriteriaChanged);
    let active: Vec<&str> = update
        .view
        .filters
        .iter()
        .filter(|button| button.active)
        .map(|button| button.filter.token())
        .collect();
    assert_eq!(active, vec!["work"]);
    assert_eq!(update.view.notes.len(), 1);
    assert_eq!(update.view.notes[0].text, "Finish report");

    let update = board.handle(BoardEvent::FilterSelected(Filter::All));
    let active: Vec<&str> = update
        .view
        .filters
        .iter()
        .filter(|button| button.active)
        .map(|button| button.filter.token())
        .collect();
    assert_eq!(active, vec!["all"]);
    assert_eq!(update.view.notes.len(), 2);
}

#[test]
fn filter_and_search_combine_on_the_board() {
    let mut board = board();
    board.handle(add("milk for work", "work"));
    board.handle(BoardEvent::FilterSelected(Filter::parse("personal")));
    let update = board.handle(BoardEvent::SearchChanged("Milk".to_string()));

    assert!(update.view.notes.is_empty());
    assert!(update.view.empty_state);
    assert_eq!(update.view.active_filter, Filter::parse("personal"));
}

#[test]
fn board_view_serializes_for_ui_collaborators() {
    let mut board = board();
    board.handle(add("Buy milk", "personal"));
    let json = serde_json::to_value(board.view()).unwrap();

    assert_eq!(json["active_filter"], "all");
    assert_eq!(json["empty_state"], false);
    assert_eq!(json["notes"][0]["date"], "Jan 5, 2024");
    assert_eq!(json["filters"][0]["filter"], "all");
    assert_eq!(json["filters"][0]["active"], true);
}
