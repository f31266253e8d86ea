//! The drag-to-reorder contract between the gesture layer and the engine.
//!
//! At drag start the gesture layer captures a full snapshot of the node
//! being moved; on drop the snapshot is consumed exactly once to build a
//! [`EditOp::Reorder`], after validating that the drop stays inside the
//! same parent container. The snapshot is cleared after every drop or
//! cancelled drag.

use crate::{EditOp, Path, Seg, TreeError, TreeResult};
use serde_json::Value;

/// The container kind a dragged node lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// An ordered object (entries addressed by key).
    Object,
    /// An array (elements addressed by index).
    Array,
}

/// Snapshot of a node captured at drag start.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggedElement {
    /// Full path of the dragged node.
    pub path: Path,
    /// The node's key or index within its parent.
    pub key: Seg,
    /// The node's value at drag start.
    pub value: Value,
    /// Kind of the parent container.
    pub parent_kind: ContainerKind,
    /// The node's position among its siblings at drag start.
    pub original_index: usize,
}

impl DraggedElement {
    /// The parent path the reorder is scoped to.
    ///
    /// `None` only for a root path, which is never a draggable node.
    pub fn parent_path(&self) -> Option<Path> {
        self.path.parent()
    }

    /// Build the reorder operation for a drop at `target_index` inside
    /// `target_parent`.
    ///
    /// Fails with `InvalidOperation` when the drop target lives under a
    /// different parent — reordering never moves a node across
    /// containers.
    pub fn reorder_to(&self, target_parent: &Path, target_index: usize) -> TreeResult<EditOp> {
        match self.parent_path() {
            Some(ref parent) if parent == target_parent => {
                Ok(EditOp::reorder(self.path.clone(), target_index))
            }
            _ => Err(TreeError::invalid_operation(
                "cannot reorder across different parents",
            )),
        }
    }
}

/// Holder for the in-flight drag, enforcing consume-once semantics.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    current: Option<DraggedElement>,
}

impl DragState {
    /// Create an idle drag state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a new drag, replacing any stale one.
    pub fn begin(&mut self, element: DraggedElement) {
        self.current = Some(element);
    }

    /// Consume the in-flight drag. Returns `None` for a stale drop (no
    /// drag in progress), which callers treat as a silent no-op.
    pub fn take(&mut self) -> Option<DraggedElement> {
        self.current.take()
    }

    /// Peek at the in-flight drag without consuming it.
    pub fn current(&self) -> Option<&DraggedElement> {
        self.current.as_ref()
    }

    /// Clear the drag (drag-end without a drop).
    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// True while a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.current.is_some()
    }
}
