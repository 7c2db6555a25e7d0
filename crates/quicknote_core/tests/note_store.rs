use chrono::NaiveDate;
use quicknote_core::{Category, FixedClock, NoteId, NoteStore};

fn fixed_store() -> NoteStore<FixedClock> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    NoteStore::with_clock(FixedClock::new(1_704_447_000_000, date))
}

#[test]
fn add_prepends_trimmed_note_with_formatted_date() {
    let mut store = fixed_store();
    let first = store.add("  Buy milk  ", Category::from("personal")).unwrap();
    let second = store.add("Finish report", Category::from("work")).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0], second);
    assert_eq!(store.list()[1], first);
    assert_eq!(first.text(), "Buy milk");
    assert_eq!(first.category().as_str(), "personal");
    assert_eq!(first.created_date(), "Jan 5, 2024");
}

#[test]
fn whitespace_only_add_is_a_silent_noop() {
    let mut store = fixed_store();
    store.add("keep", Category::from("idea")).unwrap();
    let before = store.list().to_vec();

    assert!(store.add("   \t\n ", Category::from("idea")).is_none());
    assert!(store.add("", Category::from("idea")).is_none());
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn rapid_adds_under_frozen_clock_get_distinct_increasing_ids() {
    let mut store = fixed_store();
    let ids: Vec<NoteId> = (0..5)
        .map(|idx| store.add(&format!("note {idx}"), Category::from("work")).unwrap().id())
        .collect();

    assert_eq!(ids[0].get(), 1_704_447_000_000);
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "ids must strictly increase: {pair:?}");
    }
}

#[test]
fn delete_missing_id_returns_false_and_keeps_list() {
    let mut store = fixed_store();
    store.add("only", Category::from("work")).unwrap();
    let before = store.list().to_vec();

    assert!(!store.delete(NoteId::new(1)));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn add_then_delete_restores_prior_state() {
    let mut store = fixed_store();
    store.add("existing", Category::from("personal")).unwrap();
    let before = store.list().to_vec();

    let added = store.add("temporary", Category::from("idea")).unwrap();
    assert!(store.get(added.id()).is_some());
    assert!(store.delete(added.id()));
    assert_eq!(store.list(), before.as_slice());
    assert!(store.get(added.id()).is_none());
    assert!(!store.delete(added.id()));
}

#[test]
fn system_clock_store_starts_empty() {
    let store = NoteStore::new();
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}
