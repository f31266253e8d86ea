use crate::{HistoryEntry, HistoryError};
use async_trait::async_trait;
use serde_json::Value;

/// The recent-files history contract.
///
/// Entries are ordered newest first and capped at
/// [`MAX_ENTRIES`](crate::MAX_ENTRIES); recording past the cap silently
/// drops the oldest entry. All adapters share the versioning rule: each
/// save of the same file name gets the next version number.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record a snapshot of `content` under `name`. Returns the stored
    /// entry, including its assigned id and version.
    async fn record(&self, name: &str, content: &Value) -> Result<HistoryEntry, HistoryError>;

    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Load one entry by id.
    async fn load(&self, id: &str) -> Result<HistoryEntry, HistoryError>;

    /// Remove one entry by id. Missing ids are an error.
    async fn remove(&self, id: &str) -> Result<(), HistoryError>;

    /// Remove every entry.
    async fn clear(&self) -> Result<(), HistoryError>;

    /// Number of entries held. Convenience wrapper.
    async fn len(&self) -> Result<usize, HistoryError> {
        Ok(self.list().await?.len())
    }

    /// True when no entries are held. Convenience wrapper.
    async fn is_empty(&self) -> Result<bool, HistoryError> {
        Ok(self.len().await? == 0)
    }

    /// The most recent entry, if any. Convenience wrapper.
    async fn latest(&self) -> Result<Option<HistoryEntry>, HistoryError> {
        Ok(self.list().await?.into_iter().next())
    }
}
