//! Selection store replayed against an ordered-set model.

use proptest::prelude::*;

use folio::selection::{SelectionStore, SELECTION_KEY};
use folio::storage::Database;
use folio::test_utils::fixtures::project;

#[derive(Debug, Clone)]
enum Op {
    Add(i64),
    Remove(i64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    // A small id space keeps duplicate adds and removes of present ids
    // likely.
    prop_oneof![
        (0i64..16).prop_map(Op::Add),
        (0i64..16).prop_map(Op::Remove),
    ]
}

/// Reference model: ordered set with insertion order, duplicates collapsed.
fn replay_model(ops: &[Op]) -> Vec<i64> {
    let mut model: Vec<i64> = Vec::new();
    for op in ops {
        match op {
            Op::Add(id) => {
                if !model.contains(id) {
                    model.push(*id);
                }
            }
            Op::Remove(id) => model.retain(|x| x != id),
        }
    }
    model
}

proptest! {
    #[test]
    fn selection_matches_ordered_set_model(ops in prop::collection::vec(arb_op(), 0..48)) {
        let db = Database::open_in_memory().unwrap();
        let mut store = SelectionStore::load(&db).unwrap();

        for op in &ops {
            match op {
                Op::Add(id) => {
                    store.add(&project(*id, &format!("P{id}"), "test")).unwrap();
                }
                Op::Remove(id) => {
                    store.remove(*id).unwrap();
                }
            }
        }

        let model = replay_model(&ops);
        prop_assert_eq!(store.ids(), model.as_slice());

        // The visible list is exactly the storage-backed list.
        let stored: Vec<i64> = db.get_json_or_default(SELECTION_KEY).unwrap();
        prop_assert_eq!(stored, model);
    }

    #[test]
    fn rehydrated_store_equals_final_state(ops in prop::collection::vec(arb_op(), 1..32)) {
        let db = Database::open_in_memory().unwrap();
        {
            let mut store = SelectionStore::load(&db).unwrap();
            for op in &ops {
                match op {
                    Op::Add(id) => {
                        store.add(&project(*id, &format!("P{id}"), "test")).unwrap();
                    }
                    Op::Remove(id) => {
                        store.remove(*id).unwrap();
                    }
                }
            }
        }

        let rehydrated = SelectionStore::load(&db).unwrap();
        let expected = replay_model(&ops);
        prop_assert_eq!(rehydrated.ids(), expected.as_slice());
    }
}
