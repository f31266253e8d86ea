//! Path-addressed, order-preserving JSON document editing.
//!
//! `jex-state` is the core of a JSON file viewer/editor: a pure mutation
//! engine over [`serde_json::Value`] plus the session object that holds a
//! document's original and edited snapshots.
//!
//! # Core concepts
//!
//! - **Path / Seg**: an address into a document — a sequence of object
//!   keys and array indices, re-validated on every apply
//! - **EditOp**: one localized structural change (set, delete, rename,
//!   append, insert field, reorder)
//! - **apply**: the pure engine — `(document, op) -> new document`,
//!   never mutating its input, preserving object key order
//! - **EditSession**: owns `original` and `edited`, with
//!   commit/discard/reset semantics
//! - **DragState / DraggedElement**: the consume-once reorder contract
//!   for the drag gesture layer
//!
//! # Quick start
//!
//! ```
//! use jex_state::{apply, path, EditOp};
//! use serde_json::json;
//!
//! let doc = json!({"a": 1, "b": [10, 20, 30]});
//!
//! let doc = apply(&doc, &EditOp::delete(path!("b", 1))).unwrap();
//! let doc = apply(&doc, &EditOp::rename(path!("a"), "z")).unwrap();
//! let doc = apply(&doc, &EditOp::reorder(path!("b", 0), 1)).unwrap();
//!
//! assert_eq!(doc, json!({"z": 1, "b": [30, 10]}));
//! ```

mod apply;
mod codec;
mod drag;
mod error;
mod op;
mod path;
mod session;

pub use apply::{apply, apply_all, get_at_path};
pub use codec::{document_bytes, document_size, parse_bytes, parse_document, serialize_document};
pub use drag::{ContainerKind, DragState, DraggedElement};
pub use error::{value_type_name, TreeError, TreeResult};
pub use op::EditOp;
pub use path::{Path, Seg};
pub use session::{EditSession, SessionError};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
