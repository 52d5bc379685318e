//! Durable state across simulated application restarts.

use folio::selection::{SelectionStore, SELECTION_KEY};
use folio::test_utils::fixtures::{project, StoreFixture};
use folio::theme::{ThemeMode, ThemeStore};

#[test]
fn selection_round_trips_across_restart() {
    let fixture = StoreFixture::new();

    {
        let db = fixture.open();
        let mut store = SelectionStore::load(&db).unwrap();
        store.add(&project(3, "Gamma", "library")).unwrap();
        store.add(&project(1, "Alpha", "web app")).unwrap();
        store.add(&project(2, "Beta", "library")).unwrap();
        store.remove(1).unwrap();
    }

    // Fresh in-memory state, same durable storage.
    let db = fixture.reopen();
    let store = SelectionStore::load(&db).unwrap();
    assert_eq!(store.ids(), &[3, 2]);
    // Panel visibility is session-scoped, never persisted.
    assert!(!store.is_open());
}

#[test]
fn corrupt_selection_recovers_to_empty_after_restart() {
    let fixture = StoreFixture::new();

    {
        let db = fixture.open();
        db.set(SELECTION_KEY, "][ nonsense").unwrap();
    }

    let db = fixture.reopen();
    let store = SelectionStore::load(&db).unwrap();
    assert!(store.is_empty());

    // The store stays usable after recovery.
    let mut store = store;
    store.add(&project(5, "Epsilon", "tool")).unwrap();
    assert_eq!(store.ids(), &[5]);
}

#[test]
fn theme_round_trips_across_restart() {
    let fixture = StoreFixture::new();

    {
        let db = fixture.open();
        let mut store = ThemeStore::load(&db).unwrap();
        store.toggle().unwrap();
        store.set_accent("#336699").unwrap();
    }

    let db = fixture.reopen();
    let store = ThemeStore::load(&db).unwrap();
    assert_eq!(store.mode(), ThemeMode::Light);
    assert_eq!(store.accent(), "#336699");
    assert_eq!(store.hover_shade().as_deref(), Some("rgb(21, 72, 123)"));
}

#[test]
fn stores_own_disjoint_keys() {
    let fixture = StoreFixture::new();
    let db = fixture.open();

    let mut selection = SelectionStore::load(&db).unwrap();
    let mut theme = ThemeStore::load(&db).unwrap();

    selection.add(&project(1, "Alpha", "web app")).unwrap();
    theme.toggle().unwrap();

    // Neither store clobbered the other's key.
    let db2 = fixture.reopen();
    let selection2 = SelectionStore::load(&db2).unwrap();
    let theme2 = ThemeStore::load(&db2).unwrap();
    assert_eq!(selection2.ids(), &[1]);
    assert_eq!(theme2.mode(), ThemeMode::Light);
}
