//! End-to-end session workflows: load, edit, drag, save, start over.

use jex_state::{
    document_bytes, parse_document, path, serialize_document, ContainerKind, DragState,
    DraggedElement, EditOp, EditSession, Seg,
};
use serde_json::json;

const SAMPLE: &str = r#"{
  "name": "inventory",
  "items": [
    {"sku": "A-1", "qty": 4},
    {"sku": "B-2", "qty": 0}
  ]
}"#;

#[test]
fn test_open_edit_save_workflow() {
    let mut session = EditSession::new();
    session.load(parse_document(SAMPLE).unwrap(), "inventory.json", false);

    session.enter_edit().unwrap();
    session
        .apply(&EditOp::set(path!("items", 1, "qty"), json!(7)))
        .unwrap();
    session
        .apply(&EditOp::insert_field(path!(), "revision", json!(2)))
        .unwrap();
    assert!(session.is_dirty());

    // Save: commit, then serialize the edited document.
    session.commit().unwrap();
    assert!(!session.is_dirty());

    let saved = serialize_document(session.edited().unwrap());
    let reloaded = parse_document(&saved).unwrap();
    assert_eq!(reloaded["items"][1]["qty"], 7);
    assert_eq!(reloaded["revision"], 2);
    let keys: Vec<_> = reloaded.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["name", "items", "revision"]);
}

#[test]
fn test_new_document_workflow() {
    let mut session = EditSession::new();
    session.load(json!({}), "untitled.json", true);
    assert!(session.is_new());

    session.enter_edit().unwrap();
    session
        .apply(&EditOp::insert_field(path!(), "title", json!("draft")))
        .unwrap();
    session
        .apply(&EditOp::insert_field(path!(), "items", json!([])))
        .unwrap();
    session
        .apply(&EditOp::append(path!("items"), json!("first")))
        .unwrap();

    // Leaving edit mode keeps a new document's content.
    session.exit_edit().unwrap();
    assert!(!session.is_new());
    assert_eq!(
        session.original().unwrap(),
        &json!({"title": "draft", "items": ["first"]})
    );
}

#[test]
fn test_drag_reorder_through_session() {
    let mut session = EditSession::new();
    session.load(parse_document(SAMPLE).unwrap(), "inventory.json", false);
    session.enter_edit().unwrap();

    let mut drag = DragState::new();
    drag.begin(DraggedElement {
        path: path!("items", 1),
        key: Seg::Index(1),
        value: session.edited().unwrap()["items"][1].clone(),
        parent_kind: ContainerKind::Array,
        original_index: 1,
    });

    let el = drag.take().expect("drag in flight");
    let op = el.reorder_to(&path!("items"), 0).unwrap();
    session.apply(&op).unwrap();

    assert_eq!(session.edited().unwrap()["items"][0]["sku"], "B-2");
    // The drop consumed the drag; a duplicate drop event does nothing.
    assert!(drag.take().is_none());
}

#[test]
fn test_drop_outside_parent_is_rejected_and_session_unchanged() {
    let mut session = EditSession::new();
    session.load(parse_document(SAMPLE).unwrap(), "inventory.json", false);
    let before = session.edited().unwrap().clone();

    let mut drag = DragState::new();
    drag.begin(DraggedElement {
        path: path!("items", 0),
        key: Seg::Index(0),
        value: before["items"][0].clone(),
        parent_kind: ContainerKind::Array,
        original_index: 0,
    });

    let el = drag.take().unwrap();
    assert!(el.reorder_to(&path!(), 0).is_err());
    assert_eq!(session.edited().unwrap(), &before);
}

#[test]
fn test_start_over_then_reload() {
    let mut session = EditSession::new();
    session.load(parse_document(SAMPLE).unwrap(), "inventory.json", false);
    session.apply(&EditOp::delete(path!("items", 0))).unwrap();

    session.reset();
    assert!(!session.is_loaded());

    session.load(json!({"other": true}), "other.json", false);
    assert_eq!(session.file_name(), Some("other.json"));
    assert_eq!(session.edited().unwrap(), &json!({"other": true}));
}

#[test]
fn test_download_bytes_round_trip() {
    let doc = parse_document(SAMPLE).unwrap();
    let bytes = document_bytes(&doc);
    let back = jex_state::parse_bytes(&bytes).unwrap();
    assert_eq!(back, doc);
}
