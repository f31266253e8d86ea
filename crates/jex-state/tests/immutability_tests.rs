//! Tests for purity and determinism of the mutation engine.
//!
//! These verify that:
//! 1. `apply` never mutates the input document
//! 2. a failed operation returns the input deep-equal to its pre-call state
//! 3. same `(document, op)` always produces the same result
//! 4. subtrees off the edited path are unchanged in the result

use jex_state::{apply, path, EditOp, EditSession};
use serde_json::json;

fn fixture() -> serde_json::Value {
    json!({
        "meta": {"name": "fixture", "tags": ["a", "b"]},
        "items": [
            {"id": 1, "label": "one"},
            {"id": 2, "label": "two"}
        ],
        "active": true
    })
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_apply_does_not_mutate_input() {
    let doc = fixture();
    let snapshot = doc.clone();

    let _ = apply(&doc, &EditOp::set(path!("items", 0, "label"), json!("uno"))).unwrap();
    let _ = apply(&doc, &EditOp::delete(path!("meta", "tags", 1))).unwrap();
    let _ = apply(&doc, &EditOp::rename(path!("active"), "enabled")).unwrap();

    assert_eq!(doc, snapshot, "apply mutated its input");
}

#[test]
fn test_failed_apply_leaves_input_untouched() {
    let doc = fixture();
    let snapshot = doc.clone();

    assert!(apply(&doc, &EditOp::delete(path!("missing"))).is_err());
    assert!(apply(&doc, &EditOp::set(path!("items", 9), json!(0))).is_err());
    assert!(apply(&doc, &EditOp::rename(path!(), "x")).is_err());

    assert_eq!(doc, snapshot);
}

#[test]
fn test_subtrees_off_the_path_are_unchanged() {
    let doc = fixture();
    let out = apply(&doc, &EditOp::set(path!("items", 0, "label"), json!("uno"))).unwrap();

    // Siblings of every node along the edited path are carried over intact.
    assert_eq!(out["meta"], doc["meta"]);
    assert_eq!(out["active"], doc["active"]);
    assert_eq!(out["items"][1], doc["items"][1]);
    assert_eq!(out["items"][0]["id"], doc["items"][0]["id"]);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_inputs_same_output() {
    let doc = fixture();
    let op = EditOp::reorder(path!("items", 1), 0);

    let results: Vec<_> = (0..5).map(|_| apply(&doc, &op).unwrap()).collect();
    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(results[0]["items"][0]["id"], 2);
}

#[test]
fn test_edit_sequences_replay_identically() {
    let ops = [
        EditOp::insert_field(path!("meta"), "version", json!(2)),
        EditOp::delete(path!("items", 0)),
        EditOp::rename(path!("meta", "name"), "title"),
    ];

    let mut a = fixture();
    for op in &ops {
        a = apply(&a, op).unwrap();
    }
    let mut b = fixture();
    for op in &ops {
        b = apply(&b, op).unwrap();
    }

    assert_eq!(a, b);
}

// ============================================================================
// Session-level cancel semantics build on the same guarantee
// ============================================================================

#[test]
fn test_original_survives_any_amount_of_editing() {
    let mut session = EditSession::new();
    session.load(fixture(), "fixture.json", false);
    session.enter_edit().unwrap();

    session.apply(&EditOp::delete(path!("items", 1))).unwrap();
    session.apply(&EditOp::set(path!("active"), json!(false))).unwrap();
    session
        .apply(&EditOp::append(path!("meta", "tags"), json!("c")))
        .unwrap();

    assert_eq!(session.original().unwrap(), &fixture());

    session.exit_edit().unwrap();
    assert_eq!(session.edited().unwrap(), &fixture());
}
