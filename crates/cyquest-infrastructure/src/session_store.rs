//! File-backed session store.

use std::path::PathBuf;

use async_trait::async_trait;

use cyquest_core::error::{CyquestError, Result};
use cyquest_core::session::{SessionRecord, SessionStore};

use crate::paths::CyquestPaths;
use crate::storage::AtomicJsonFile;

/// Session store persisting the single record as an atomic JSON file.
///
/// The record is the login boundary of the whole app, so it gets the
/// locked atomic store rather than the migrating document storage: the
/// schema is a stable, externally-written contract.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    file: AtomicJsonFile<SessionRecord>,
}

impl FileSessionStore {
    /// Creates a store persisting to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a store persisting to the default session file location.
    pub fn with_default_path() -> Result<Self> {
        let path = CyquestPaths::session_file()
            .map_err(|e| CyquestError::config(e.to_string()))?;
        Ok(Self::new(path))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<SessionRecord>> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || {
            file.load()
                .map_err(|e| CyquestError::data_access(e.to_string()))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn save(&self, record: &SessionRecord) -> Result<()> {
        let file = self.file.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || {
            file.save(&record)
                .map_err(|e| CyquestError::data_access(e.to_string()))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn clear(&self) -> Result<()> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || {
            file.remove()
                .map_err(|e| CyquestError::data_access(e.to_string()))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))?
    }
}
