use crate::types::push_entry;
use crate::{HistoryEntry, HistoryError, HistoryStore};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// File-backed history store: all entries in one JSON file, rewritten
/// atomically on every change.
pub struct FileHistory {
    path: PathBuf,
    // Serializes read-modify-write cycles against the file.
    lock: Mutex<()>,
}

impl FileHistory {
    /// Create a store backed by the given file. The file is created on
    /// first write; a missing file reads as an empty history.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load_entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // A corrupt history file is not worth failing the app for.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "history file unreadable, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_entries(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| HistoryError::Serialization(e.to_string()))?;

        let tmp_path = self
            .path
            .with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

        let write_result = async {
            let mut file = tokio::fs::File::create(&tmp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
            file.sync_all().await?;
            drop(file);
            match tokio::fs::rename(&tmp_path, &self.path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    tokio::fs::remove_file(&self.path).await?;
                    tokio::fs::rename(&tmp_path, &self.path).await?;
                }
                Err(e) => return Err(e),
            }
            Ok::<(), std::io::Error>(())
        }
        .await;

        if let Err(e) = write_result {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(HistoryError::Io(e));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for FileHistory {
    async fn record(&self, name: &str, content: &Value) -> Result<HistoryEntry, HistoryError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load_entries().await?;
        let entry = push_entry(&mut entries, name, content);
        self.save_entries(&entries).await?;
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let _guard = self.lock.lock().await;
        self.load_entries().await
    }

    async fn load(&self, id: &str) -> Result<HistoryEntry, HistoryError> {
        let _guard = self.lock.lock().await;
        self.load_entries()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }

    async fn remove(&self, id: &str) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load_entries().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        self.save_entries(&entries).await
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;
        self.save_entries(&[]).await
    }
}
