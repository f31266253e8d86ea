//! Tests for object key order across the full operation set.
//!
//! Key order is the display order of the editor; every mutation keeps the
//! untouched keys exactly where they were.

use jex_state::{apply, apply_all, path, EditOp};
use serde_json::{json, Value};

fn keys(doc: &Value) -> Vec<&str> {
    doc.as_object()
        .expect("expected an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn test_set_existing_key_keeps_position() {
    let doc = json!({"a": 1, "b": 2, "c": 3});
    let out = apply(&doc, &EditOp::set(path!("b"), json!(99))).unwrap();
    assert_eq!(keys(&out), ["a", "b", "c"]);
    assert_eq!(out["b"], 99);
}

#[test]
fn test_set_new_key_appends() {
    let doc = json!({"a": 1, "b": 2});
    let out = apply(&doc, &EditOp::set(path!("z"), json!(0))).unwrap();
    assert_eq!(keys(&out), ["a", "b", "z"]);
}

#[test]
fn test_delete_preserves_remaining_order() {
    let doc = json!({"a": 1, "b": 2, "c": 3, "d": 4});
    let out = apply(&doc, &EditOp::delete(path!("b"))).unwrap();
    assert_eq!(keys(&out), ["a", "c", "d"]);
}

#[test]
fn test_rename_keeps_old_position() {
    let doc = json!({"a": 1, "b": 2, "c": 3});
    let out = apply(&doc, &EditOp::rename(path!("b"), "beta")).unwrap();
    assert_eq!(keys(&out), ["a", "beta", "c"]);
    assert_eq!(out["beta"], 2);
}

#[test]
fn test_rename_collision_overwrites_at_old_position() {
    let doc = json!({"a": 1, "b": 2, "c": 3});
    let out = apply(&doc, &EditOp::rename(path!("a"), "c")).unwrap();
    assert_eq!(keys(&out), ["c", "b"]);
    assert_eq!(out["c"], 1);
}

#[test]
fn test_insert_field_appends_new_overwrites_existing_in_place() {
    let doc = json!({"a": 1, "b": 2});

    let out = apply(&doc, &EditOp::insert_field(path!(), "c", json!(3))).unwrap();
    assert_eq!(keys(&out), ["a", "b", "c"]);

    let out = apply(&doc, &EditOp::insert_field(path!(), "a", json!(9))).unwrap();
    assert_eq!(keys(&out), ["a", "b"]);
    assert_eq!(out["a"], 9);
}

#[test]
fn test_object_reorder_moves_one_entry() {
    let doc = json!({"a": 1, "b": 2, "c": 3, "d": 4});

    let out = apply(&doc, &EditOp::reorder(path!("d"), 0)).unwrap();
    assert_eq!(keys(&out), ["d", "a", "b", "c"]);

    let out = apply(&doc, &EditOp::reorder(path!("a"), 3)).unwrap();
    assert_eq!(keys(&out), ["b", "c", "d", "a"]);
    // Values travel with their keys.
    assert_eq!(out["a"], 1);
}

#[test]
fn test_array_reorder() {
    let doc = json!({"b": [10, 20, 30]});
    let out = apply(&doc, &EditOp::reorder(path!("b", 0), 2)).unwrap();
    assert_eq!(out["b"], json!([20, 30, 10]));
}

#[test]
fn test_reorder_to_same_position_is_identity() {
    let doc = json!({"a": 1, "b": 2});
    let out = apply(&doc, &EditOp::reorder(path!("b"), 1)).unwrap();
    assert_eq!(out, doc);
}

#[test]
fn test_nested_object_order_is_independent() {
    let doc = json!({"outer": {"x": 1, "y": 2}, "z": 3});
    let out = apply(&doc, &EditOp::rename(path!("outer", "x"), "w")).unwrap();
    assert_eq!(keys(&out), ["outer", "z"]);
    assert_eq!(keys(&out["outer"]), ["w", "y"]);
}

#[test]
fn test_edit_chain_order() {
    // A representative edit session against one small document.
    let doc = json!({"a": 1, "b": [10, 20, 30]});
    let out = apply_all(
        &doc,
        &[
            EditOp::delete(path!("b", 1)),
            EditOp::rename(path!("a"), "count"),
            EditOp::append(path!("b"), json!(40)),
            EditOp::insert_field(path!(), "note", json!("hi")),
            EditOp::reorder(path!("note"), 0),
        ],
    )
    .unwrap();

    assert_eq!(keys(&out), ["note", "count", "b"]);
    assert_eq!(out["b"], json!([10, 30, 40]));
}
