//! Document parsing and serialization.
//!
//! The file collaborators hand the engine raw bytes and expect bytes back;
//! everything in between is a [`serde_json::Value`] whose object key order
//! is the display order and must survive a save/reload round trip.

use crate::error::TreeResult;
use serde_json::Value;

/// Parse a JSON document from text.
///
/// On failure nothing is committed; the caller keeps whatever document it
/// already had.
pub fn parse_document(text: &str) -> TreeResult<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a JSON document from raw file bytes (UTF-8).
pub fn parse_bytes(bytes: &[u8]) -> TreeResult<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Serialize a document for saving: 2-space indentation, object keys in
/// the order the document holds them.
pub fn serialize_document(doc: &Value) -> String {
    // Pretty-printing a Value cannot fail.
    serde_json::to_string_pretty(doc).expect("Value serialization is infallible")
}

/// Serialize a document to bytes for download.
pub fn document_bytes(doc: &Value) -> Vec<u8> {
    serialize_document(doc).into_bytes()
}

/// Compact serialized size of a document, in bytes.
pub fn document_size(doc: &Value) -> usize {
    doc.to_string().len()
}
