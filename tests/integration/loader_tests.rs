//! Content loader against a mock remote store.

use httpmock::prelude::*;

use folio::content::loader::{ContentLoader, LoadPhase, SnapshotSource, DEGRADED_NOTICE};
use folio::content::Snapshot;
use folio::remote::RemoteStore;
use folio::test_utils::fixtures::sample_snapshot;

const TEST_KEY: &str = "test-anon-key";

fn mock_collection(server: &MockServer, table: &str, order: &str, body: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/rest/v1/{table}"))
            .query_param("select", "*")
            .query_param("order", order)
            .header("apikey", TEST_KEY);
        then.status(200).json_body(body);
    });
}

fn mock_profile(server: &MockServer, body: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/profile")
            .query_param("select", "*")
            .query_param("limit", "1")
            .header("apikey", TEST_KEY);
        then.status(200).json_body(body);
    });
}

#[test]
fn all_queries_succeed_adopts_remote_snapshot() {
    let server = MockServer::start();
    let expected = sample_snapshot();

    mock_profile(&server, serde_json::json!([expected.profile]));
    mock_collection(&server, "skills", "id.asc", serde_json::json!(expected.skills));
    mock_collection(
        &server,
        "experiences",
        "id.asc",
        serde_json::json!(expected.experiences),
    );
    mock_collection(
        &server,
        "projects",
        "id.desc",
        serde_json::json!(expected.projects),
    );
    mock_collection(
        &server,
        "education",
        "id.desc",
        serde_json::json!(expected.education),
    );

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let mut loader = ContentLoader::new();
    let outcome = loader.load(&remote);

    assert_eq!(loader.phase(), LoadPhase::Ready);
    assert!(!loader.is_loading());
    assert_eq!(outcome.source, SnapshotSource::Remote);
    assert!(outcome.notice.is_none());
    assert_eq!(outcome.snapshot, expected);
}

#[test]
fn one_failing_query_discards_all_results() {
    let server = MockServer::start();
    let remote_data = sample_snapshot();

    // Four collections succeed with data that differs from the bundled
    // dataset; education fails.
    mock_profile(&server, serde_json::json!([remote_data.profile]));
    mock_collection(
        &server,
        "skills",
        "id.asc",
        serde_json::json!(remote_data.skills),
    );
    mock_collection(
        &server,
        "experiences",
        "id.asc",
        serde_json::json!(remote_data.experiences),
    );
    mock_collection(
        &server,
        "projects",
        "id.desc",
        serde_json::json!(remote_data.projects),
    );
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/education");
        then.status(500).json_body(serde_json::json!({"message": "boom"}));
    });

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let mut loader = ContentLoader::new();
    let outcome = loader.load(&remote);

    assert_eq!(loader.phase(), LoadPhase::Degraded);
    assert_eq!(outcome.source, SnapshotSource::Static);
    assert_eq!(outcome.notice.as_deref(), Some(DEGRADED_NOTICE));
    // The entire bundled dataset, not a mix: the successful skills result
    // must not leak into the snapshot.
    assert_eq!(outcome.snapshot, Snapshot::bundled());
    assert_ne!(outcome.snapshot.skills, remote_data.skills);
}

#[test]
fn empty_profile_result_counts_as_failure() {
    let server = MockServer::start();
    let remote_data = sample_snapshot();

    mock_profile(&server, serde_json::json!([]));
    mock_collection(
        &server,
        "skills",
        "id.asc",
        serde_json::json!(remote_data.skills),
    );
    mock_collection(
        &server,
        "experiences",
        "id.asc",
        serde_json::json!(remote_data.experiences),
    );
    mock_collection(
        &server,
        "projects",
        "id.desc",
        serde_json::json!(remote_data.projects),
    );
    mock_collection(
        &server,
        "education",
        "id.desc",
        serde_json::json!(remote_data.education),
    );

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let mut loader = ContentLoader::new();
    let outcome = loader.load(&remote);

    assert_eq!(loader.phase(), LoadPhase::Degraded);
    assert_eq!(outcome.snapshot, Snapshot::bundled());
}

#[test]
fn malformed_rows_count_as_failure() {
    let server = MockServer::start();
    let remote_data = sample_snapshot();

    mock_profile(&server, serde_json::json!([remote_data.profile]));
    // Skills rows missing the required id column.
    mock_collection(
        &server,
        "skills",
        "id.asc",
        serde_json::json!([{"name": "Rust"}]),
    );
    mock_collection(
        &server,
        "experiences",
        "id.asc",
        serde_json::json!(remote_data.experiences),
    );
    mock_collection(
        &server,
        "projects",
        "id.desc",
        serde_json::json!(remote_data.projects),
    );
    mock_collection(
        &server,
        "education",
        "id.desc",
        serde_json::json!(remote_data.education),
    );

    let remote = RemoteStore::new(&server.base_url(), TEST_KEY).unwrap();
    let outcome = ContentLoader::new().load(&remote);
    assert_eq!(outcome.source, SnapshotSource::Static);
    assert_eq!(outcome.snapshot, Snapshot::bundled());
}
