//! End-to-end lifecycle tests for the snapshot verifier: first-run behavior,
//! change detection, cleanup on fix, and idempotence of success. Each test
//! gets its own temporary artifact directory so runs cannot interfere.

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use verisnap::{canon, SnapError, TestIdentity, Verifier};

fn fresh() -> (TempDir, Verifier) {
    let dir = TempDir::new().expect("create temp artifact dir");
    let verifier = Verifier::new(dir.path());
    (dir, verifier)
}

#[test]
fn first_run_writes_received_and_reports_no_baseline() {
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "first_run");
    let subject = json!({"country": "Finland", "post code": "00380"});

    let err = verifier.verify(&id, &subject).unwrap_err();
    assert!(matches!(err, SnapError::NoBaseline { .. }));

    let received = id.received_path(dir.path());
    assert!(received.exists());
    assert_eq!(
        fs::read_to_string(&received).unwrap(),
        canon::canonical_json(&subject)
    );
    assert!(!id.approved_path(dir.path()).exists());
}

#[test]
fn approving_the_received_artifact_makes_the_rerun_pass() {
    // The full review workflow: fail, promote, re-run, pass clean.
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "test_first_get");
    let subject = json!({"country": "Finland", "post code": "00380"});

    assert!(verifier.verify(&id, &subject).is_err());
    fs::rename(id.received_path(dir.path()), id.approved_path(dir.path())).unwrap();

    verifier.verify(&id, &subject).unwrap();
    assert!(!id.received_path(dir.path()).exists());
}

#[test]
fn success_is_idempotent_and_leaves_no_received_artifact() {
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "idempotent");
    let subject = json!({"k": [1, 2, 3]});

    fs::create_dir_all(dir.path()).unwrap();
    fs::write(
        id.approved_path(dir.path()),
        canon::canonical_json(&subject),
    )
    .unwrap();

    verifier.verify(&id, &subject).unwrap();
    verifier.verify(&id, &subject).unwrap();
    assert!(!id.received_path(dir.path()).exists());
}

#[test]
fn mismatch_overwrites_received_with_the_new_canonical_text() {
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "mismatch");
    let approved = json!({"status": "old"});
    let current = json!({"status": "new"});

    fs::write(
        id.approved_path(dir.path()),
        canon::canonical_json(&approved),
    )
    .unwrap();

    let err = verifier.verify(&id, &current).unwrap_err();
    match err {
        SnapError::Mismatch { diff, .. } => {
            assert!(diff.contains("-  \"status\": \"old\""));
            assert!(diff.contains("+  \"status\": \"new\""));
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(id.received_path(dir.path())).unwrap(),
        canon::canonical_json(&current)
    );
}

#[test]
fn stale_received_artifact_is_removed_once_the_subject_matches_again() {
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "cleanup");
    let approved = json!({"v": 1});

    fs::write(
        id.approved_path(dir.path()),
        canon::canonical_json(&approved),
    )
    .unwrap();

    assert!(verifier.verify(&id, &json!({"v": 2})).is_err());
    assert!(id.received_path(dir.path()).exists());

    verifier.verify(&id, &approved).unwrap();
    assert!(!id.received_path(dir.path()).exists());
}

#[test]
fn crlf_baselines_still_match() {
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "crlf");
    let subject = json!({"k": 1});

    let crlf = canon::canonical_json(&subject).replace('\n', "\r\n");
    fs::write(id.approved_path(dir.path()), crlf).unwrap();

    verifier.verify(&id, &subject).unwrap();
}

#[test]
fn unwritable_artifact_dir_is_a_fatal_artifact_error() {
    // Point the verifier at a path that is a file, so creating the
    // directory for the received artifact must fail.
    let dir = TempDir::new().unwrap();
    let blocking_file = dir.path().join("occupied");
    fs::write(&blocking_file, "not a directory").unwrap();

    let verifier = Verifier::new(&blocking_file);
    let id = TestIdentity::new("lifecycle", "io_fault");
    let err = verifier.verify(&id, &json!({"k": 1})).unwrap_err();
    assert!(matches!(err, SnapError::Artifact { .. }));
    assert!(!err.is_snapshot_failure());
}

#[test]
fn key_insertion_order_never_causes_a_mismatch() {
    let (dir, verifier) = fresh();
    let id = TestIdentity::new("lifecycle", "key_order");

    let mut forward = serde_json::Map::new();
    forward.insert("a".into(), json!(1));
    forward.insert("b".into(), json!(2));
    let mut reverse = serde_json::Map::new();
    reverse.insert("b".into(), json!(2));
    reverse.insert("a".into(), json!(1));

    fs::write(
        id.approved_path(dir.path()),
        canon::canonical_json(&serde_json::Value::Object(forward)),
    )
    .unwrap();

    verifier
        .verify(&id, &serde_json::Value::Object(reverse))
        .unwrap();
}
