//! Error types for document editing operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for editing operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while resolving a path or applying an edit.
///
/// Every failure is returned as a value; the engine never panics on bad
/// input, and a failed operation leaves the document untouched.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A path segment does not resolve in the document.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The full path that failed to resolve.
        path: Path,
    },

    /// An array index segment is out of range.
    #[error("index {index} out of bounds (len: {len}) at path {path}")]
    IndexOutOfBounds {
        /// The full path of the failing access.
        path: Path,
        /// The index that was accessed.
        index: usize,
        /// The actual length of the array.
        len: usize,
    },

    /// A segment kind does not match the container it was applied to
    /// (key segment against an array, index segment against an object).
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The full path of the failing access.
        path: Path,
        /// The container kind the segment requires.
        expected: &'static str,
        /// The kind actually found.
        found: &'static str,
    },

    /// A semantically disallowed edit (delete/rename the root, rename an
    /// array element, reorder to an out-of-range position).
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of what was disallowed.
        message: String,
    },

    /// The input text was not valid JSON.
    #[error("invalid JSON document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TreeError {
    /// Create a path not found error.
    #[inline]
    pub fn path_not_found(path: Path) -> Self {
        TreeError::PathNotFound { path }
    }

    /// Create an index out of bounds error.
    #[inline]
    pub fn index_out_of_bounds(path: Path, index: usize, len: usize) -> Self {
        TreeError::IndexOutOfBounds { path, index, len }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        TreeError::TypeMismatch {
            path,
            expected,
            found,
        }
    }

    /// Create an invalid operation error.
    #[inline]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        TreeError::InvalidOperation {
            message: message.into(),
        }
    }
}

/// Get the JSON type name of a value, for error messages.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
