use crate::types::push_entry;
use crate::{HistoryEntry, HistoryError, HistoryStore};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

/// In-memory history store. The default for a session-scoped history.
#[derive(Default)]
pub struct MemoryHistory {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn record(&self, name: &str, content: &Value) -> Result<HistoryEntry, HistoryError> {
        let mut entries = self.entries.write().await;
        Ok(push_entry(&mut entries, name, content))
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.read().await.clone())
    }

    async fn load(&self, id: &str) -> Result<HistoryEntry, HistoryError> {
        self.entries
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }

    async fn remove(&self, id: &str) -> Result<(), HistoryError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ENTRIES;
    use serde_json::json;

    #[tokio::test]
    async fn memory_record_and_list() {
        let store = MemoryHistory::new();
        store.record("a.json", &json!({"a": 1})).await.unwrap();
        store.record("b.json", &json!({"b": 2})).await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].original_name, "b.json");
        assert_eq!(entries[1].original_name, "a.json");
    }

    #[tokio::test]
    async fn memory_versioning() {
        let store = MemoryHistory::new();
        store.record("data.json", &json!(1)).await.unwrap();
        let second = store.record("data.json", &json!(2)).await.unwrap();
        assert_eq!(second.name, "data.json (v2)");

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.content, json!(2));
    }

    #[tokio::test]
    async fn memory_load_and_remove() {
        let store = MemoryHistory::new();
        let entry = store.record("a.json", &json!([1, 2])).await.unwrap();

        let loaded = store.load(&entry.id).await.unwrap();
        assert_eq!(loaded.content, json!([1, 2]));

        store.remove(&entry.id).await.unwrap();
        assert!(matches!(
            store.load(&entry.id).await,
            Err(HistoryError::NotFound(_))
        ));
        assert!(matches!(
            store.remove(&entry.id).await,
            Err(HistoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn memory_cap() {
        let store = MemoryHistory::new();
        for i in 0..MAX_ENTRIES + 5 {
            store.record("same.json", &json!(i)).await.unwrap();
        }
        assert_eq!(store.len().await.unwrap(), MAX_ENTRIES);
        // Newest survives, the first saves are gone.
        assert_eq!(store.latest().await.unwrap().unwrap().content, json!(14));
    }

    #[tokio::test]
    async fn memory_clear() {
        let store = MemoryHistory::new();
        store.record("a.json", &json!(1)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.is_empty().await.unwrap());
    }
}
