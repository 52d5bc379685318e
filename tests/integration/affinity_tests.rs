//! Affinity tracker against a mock remote store.

use httpmock::prelude::*;

use folio::affinity::{AffinityTracker, EndorseOutcome, ENDORSED_KEY};
use folio::remote::RemoteStore;
use folio::test_utils::fixtures::{sample_snapshot, StoreFixture};

const TEST_KEY: &str = "test-anon-key";

#[test]
fn successful_remote_increment_commits() {
    let server = MockServer::start();
    let rpc = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/rpc/increment_love")
            .header("apikey", TEST_KEY)
            .json_body(serde_json::json!({"skill_id": 1}));
        then.status(204);
    });

    let fixture = StoreFixture::new();
    let db = fixture.open();
    let mut tracker = AffinityTracker::load(&db).unwrap();
    let mut skills = sample_snapshot().skills;
    let original = skills[0].love_count;

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let outcome = tracker.endorse(&mut skills, 1, &remote).unwrap();

    rpc.assert();
    assert_eq!(
        outcome,
        EndorseOutcome::Committed {
            new_count: original + 1
        }
    );
    assert_eq!(skills[0].love_count, original + 1);
    assert!(tracker.is_endorsed(1));

    let stored: Vec<i64> = db.get_json_or_default(ENDORSED_KEY).unwrap();
    assert_eq!(stored, vec![1]);
}

#[test]
fn failing_remote_increment_rolls_back_exactly() {
    let server = MockServer::start();
    let rpc = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/rpc/increment_love");
        then.status(500)
            .json_body(serde_json::json!({"message": "boom"}));
    });

    let fixture = StoreFixture::new();
    let db = fixture.open();
    let mut tracker = AffinityTracker::load(&db).unwrap();
    let mut skills = sample_snapshot().skills;
    let original = skills[0].love_count;

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let outcome = tracker.endorse(&mut skills, 1, &remote).unwrap();

    rpc.assert();
    assert_eq!(outcome, EndorseOutcome::RolledBack);
    // Counter net zero, membership net absent.
    assert_eq!(skills[0].love_count, original);
    assert!(!tracker.is_endorsed(1));

    let stored: Vec<i64> = db.get_json_or_default(ENDORSED_KEY).unwrap();
    assert!(stored.is_empty());
}

#[test]
fn duplicate_endorsement_never_reaches_the_remote() {
    let server = MockServer::start();
    let rpc = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/rpc/increment_love");
        then.status(204);
    });

    let fixture = StoreFixture::new();
    let db = fixture.open();
    let mut tracker = AffinityTracker::load(&db).unwrap();
    let mut skills = sample_snapshot().skills;

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    tracker.endorse(&mut skills, 2, &remote).unwrap();
    let outcome = tracker.endorse(&mut skills, 2, &remote).unwrap();

    assert_eq!(outcome, EndorseOutcome::AlreadyEndorsed);
    rpc.assert_hits(1);
}

#[test]
fn endorsements_block_duplicates_across_restarts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/rest/v1/rpc/increment_love");
        then.status(204);
    });

    let fixture = StoreFixture::new();
    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let mut skills = sample_snapshot().skills;

    {
        let db = fixture.open();
        let mut tracker = AffinityTracker::load(&db).unwrap();
        tracker.endorse(&mut skills, 3, &remote).unwrap();
    }

    let db = fixture.reopen();
    let mut tracker = AffinityTracker::load(&db).unwrap();
    let outcome = tracker.endorse(&mut skills, 3, &remote).unwrap();
    assert_eq!(outcome, EndorseOutcome::AlreadyEndorsed);
}
