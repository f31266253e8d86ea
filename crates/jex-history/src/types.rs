use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Most recent entries kept per store; older ones are dropped on record.
pub const MAX_ENTRIES: usize = 10;

/// One saved snapshot of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry id.
    pub id: String,
    /// Display name, versioned: "data.json (v3)" from the third save of
    /// "data.json".
    pub name: String,
    /// The file name the snapshot was saved under.
    pub original_name: String,
    /// The full document at save time.
    pub content: Value,
    /// Save time, epoch milliseconds.
    pub timestamp: u64,
    /// Compact-serialized size of the content.
    pub size_bytes: usize,
    /// 1-based save count for this original_name.
    pub version: u32,
}

/// Errors surfaced by history stores.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history entry not found: {0}")]
    NotFound(String),

    #[error("history serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn next_entry_id(timestamp: u64) -> String {
    // The sequence suffix keeps ids unique within one millisecond.
    let seq = ENTRY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{timestamp}-{seq}")
}

/// Build and prepend a new entry, enforcing the version counter and the
/// entry cap. Shared by every adapter so their semantics cannot drift.
pub(crate) fn push_entry(entries: &mut Vec<HistoryEntry>, name: &str, content: &Value) -> HistoryEntry {
    let version = entries
        .iter()
        .filter(|e| e.original_name == name)
        .count() as u32
        + 1;
    let display_name = if version == 1 {
        name.to_string()
    } else {
        format!("{name} (v{version})")
    };
    let timestamp = now_millis();
    let entry = HistoryEntry {
        id: next_entry_id(timestamp),
        name: display_name,
        original_name: name.to_string(),
        content: content.clone(),
        timestamp,
        size_bytes: content.to_string().len(),
        version,
    };
    // Newest first.
    entries.insert(0, entry.clone());
    entries.truncate(MAX_ENTRIES);
    entry
}
