//! Edit operations on a JSON document.
//!
//! Each operation names a location (a [`Path`]) and a single structural
//! change to make there. Operations carry no document state; the engine in
//! [`crate::apply`] resolves the path and performs the terminal change.

use crate::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single edit operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Set the value at the path.
    ///
    /// The empty path replaces the whole document. An existing object key
    /// keeps its position; a new key is appended at the end of the key
    /// order. An array index must be in bounds.
    Set {
        /// Target path.
        path: Path,
        /// Value to set.
        value: Value,
    },

    /// Delete the node at the path.
    ///
    /// Remaining object keys keep their order; array elements shift left.
    /// The root cannot be deleted.
    Delete {
        /// Target path.
        path: Path,
    },

    /// Rename the object key addressed by the path, keeping its position.
    ///
    /// Only legal when the parent is an object. If `new_key` already
    /// exists elsewhere in the same object, that entry is overwritten and
    /// the renamed entry keeps the old key's position.
    Rename {
        /// Path whose final segment is the key to rename.
        path: Path,
        /// The replacement key.
        new_key: String,
    },

    /// Append a value to the array at the path.
    Append {
        /// Target path (must resolve to an array).
        path: Path,
        /// Value to append.
        value: Value,
    },

    /// Insert `key → value` into the object at the path.
    ///
    /// A new key lands at the end of the key order; an existing key is
    /// overwritten in place.
    InsertField {
        /// Target path (must resolve to an object).
        path: Path,
        /// Field name.
        key: String,
        /// Field value.
        value: Value,
    },

    /// Move the node at the path to `target_index` among its siblings.
    ///
    /// Works for both array elements and object entries (the object's
    /// key order is treated as a list). A no-op when the node is already
    /// at the target position.
    Reorder {
        /// Path of the node to move; its parent is the reorder scope.
        path: Path,
        /// Destination position within the parent, in `[0, len)`.
        target_index: usize,
    },
}

impl EditOp {
    /// Create a Set operation.
    #[inline]
    pub fn set(path: Path, value: impl Into<Value>) -> Self {
        EditOp::Set {
            path,
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    #[inline]
    pub fn delete(path: Path) -> Self {
        EditOp::Delete { path }
    }

    /// Create a Rename operation.
    #[inline]
    pub fn rename(path: Path, new_key: impl Into<String>) -> Self {
        EditOp::Rename {
            path,
            new_key: new_key.into(),
        }
    }

    /// Create an Append operation.
    #[inline]
    pub fn append(path: Path, value: impl Into<Value>) -> Self {
        EditOp::Append {
            path,
            value: value.into(),
        }
    }

    /// Create an InsertField operation.
    #[inline]
    pub fn insert_field(path: Path, key: impl Into<String>, value: impl Into<Value>) -> Self {
        EditOp::InsertField {
            path,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Reorder operation.
    #[inline]
    pub fn reorder(path: Path, target_index: usize) -> Self {
        EditOp::Reorder { path, target_index }
    }

    /// Get the path this operation targets.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            EditOp::Set { path, .. } => path,
            EditOp::Delete { path } => path,
            EditOp::Rename { path, .. } => path,
            EditOp::Append { path, .. } => path,
            EditOp::InsertField { path, .. } => path,
            EditOp::Reorder { path, .. } => path,
        }
    }

    /// Get the operation name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            EditOp::Set { .. } => "set",
            EditOp::Delete { .. } => "delete",
            EditOp::Rename { .. } => "rename",
            EditOp::Append { .. } => "append",
            EditOp::InsertField { .. } => "insert_field",
            EditOp::Reorder { .. } => "reorder",
        }
    }
}
