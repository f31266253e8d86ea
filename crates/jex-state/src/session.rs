//! The edit session: one document's original and in-progress edited form.
//!
//! An [`EditSession`] owns two snapshots of the open document: `original`
//! (as loaded, or as last committed) and `edited` (accumulating changes).
//! Every structural change goes through the pure engine in
//! [`crate::apply`] and replaces `edited` wholesale on success, so a held
//! `original` never observes a later edit. Exiting edit mode reconciles
//! the two: a brand-new document commits, an existing one discards.

use crate::{apply, EditOp, TreeError};
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No document is loaded.
    #[error("no document loaded")]
    NoDocument,

    /// The delegated edit failed; the edited document is unchanged.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// A loaded document under (potential) edit.
#[derive(Debug, Clone)]
struct OpenDocument {
    original: Value,
    edited: Value,
    file_name: String,
    is_new: bool,
    editing: bool,
}

/// Stateful holder of a document's original and edited snapshots, with
/// commit/discard semantics.
///
/// # Examples
///
/// ```
/// use jex_state::{path, EditOp, EditSession};
/// use serde_json::json;
///
/// let mut session = EditSession::new();
/// session.load(json!({"a": 1}), "data.json", false);
/// session.enter_edit().unwrap();
/// session.apply(&EditOp::set(path!("a"), json!(2))).unwrap();
///
/// assert_eq!(session.edited().unwrap(), &json!({"a": 2}));
/// assert_eq!(session.original().unwrap(), &json!({"a": 1}));
///
/// session.exit_edit().unwrap(); // existing file: unsaved changes dropped
/// assert_eq!(session.edited().unwrap(), &json!({"a": 1}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    doc: Option<OpenDocument>,
}

impl EditSession {
    /// Create an empty session (no document).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document, replacing whatever was open.
    ///
    /// Both snapshots start identical. `is_new` marks a document created
    /// in-app rather than loaded from an existing file; it changes what
    /// exiting edit mode does.
    pub fn load(&mut self, value: Value, file_name: impl Into<String>, is_new: bool) {
        self.doc = Some(OpenDocument {
            original: value.clone(),
            edited: value,
            file_name: file_name.into(),
            is_new,
            editing: false,
        });
    }

    /// True if a document is loaded.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.doc.is_some()
    }

    /// The open document's file name.
    pub fn file_name(&self) -> Option<&str> {
        self.doc.as_ref().map(|d| d.file_name.as_str())
    }

    /// The original (last committed) snapshot.
    pub fn original(&self) -> Option<&Value> {
        self.doc.as_ref().map(|d| &d.original)
    }

    /// The edited snapshot.
    pub fn edited(&self) -> Option<&Value> {
        self.doc.as_ref().map(|d| &d.edited)
    }

    /// True if the document was created in-app and never committed.
    pub fn is_new(&self) -> bool {
        self.doc.as_ref().is_some_and(|d| d.is_new)
    }

    /// True while edit mode is active.
    pub fn is_editing(&self) -> bool {
        self.doc.as_ref().is_some_and(|d| d.editing)
    }

    /// True if the edited snapshot differs from the original.
    pub fn is_dirty(&self) -> bool {
        self.doc.as_ref().is_some_and(|d| d.edited != d.original)
    }

    /// Enter edit mode.
    pub fn enter_edit(&mut self) -> Result<(), SessionError> {
        let doc = self.doc.as_mut().ok_or(SessionError::NoDocument)?;
        doc.editing = true;
        Ok(())
    }

    /// Leave edit mode, reconciling the two snapshots.
    ///
    /// A new document keeps its edits (they become the original, and the
    /// document stops being "new"); an existing document drops unsaved
    /// changes.
    pub fn exit_edit(&mut self) -> Result<(), SessionError> {
        let doc = self.doc.as_mut().ok_or(SessionError::NoDocument)?;
        doc.editing = false;
        if doc.is_new {
            doc.original = doc.edited.clone();
            doc.is_new = false;
        } else {
            doc.edited = doc.original.clone();
        }
        Ok(())
    }

    /// Apply one edit to the edited snapshot.
    ///
    /// Delegates to the pure engine; on success the edited snapshot is
    /// replaced with the new document, on failure it is left untouched
    /// and the failure is surfaced unchanged.
    pub fn apply(&mut self, op: &EditOp) -> Result<(), SessionError> {
        let doc = self.doc.as_mut().ok_or(SessionError::NoDocument)?;
        doc.edited = apply(&doc.edited, op)?;
        Ok(())
    }

    /// Commit: the edited snapshot becomes the original (used on save).
    pub fn commit(&mut self) -> Result<(), SessionError> {
        let doc = self.doc.as_mut().ok_or(SessionError::NoDocument)?;
        doc.original = doc.edited.clone();
        doc.is_new = false;
        Ok(())
    }

    /// Discard: the edited snapshot is reset to the original.
    pub fn discard(&mut self) -> Result<(), SessionError> {
        let doc = self.doc.as_mut().ok_or(SessionError::NoDocument)?;
        doc.edited = doc.original.clone();
        Ok(())
    }

    /// Close the document entirely ("choose another file").
    pub fn reset(&mut self) {
        self.doc = None;
    }
}
