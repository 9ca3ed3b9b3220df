//! File-backed progress repository.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

use cyquest_core::error::{CyquestError, Result};
use cyquest_core::progress::{Progress, ProgressRepository};

use crate::dto::create_progress_migrator;
use crate::paths::CyquestPaths;

/// Progress repository persisting XP and mission completions as one
/// document.
#[derive(Clone)]
pub struct FileProgressRepository {
    storage: Arc<Mutex<FileStorage>>,
}

impl FileProgressRepository {
    /// Creates a repository rooted at `state_dir`.
    pub fn new(state_dir: &Path) -> Result<Self> {
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Json)
            .with_load_behavior(LoadBehavior::SaveIfMissing)
            .with_default_value(serde_json::to_value(Progress::default())?);

        let storage = FileStorage::new(
            state_dir.join("progress.json"),
            create_progress_migrator(),
            strategy,
        )?;

        Ok(Self {
            storage: Arc::new(Mutex::new(storage)),
        })
    }

    /// Creates a repository rooted at the default state directory.
    pub fn with_default_dir() -> Result<Self> {
        let state_dir =
            CyquestPaths::state_dir().map_err(|e| CyquestError::config(e.to_string()))?;
        Self::new(&state_dir)
    }
}

#[async_trait]
impl ProgressRepository for FileProgressRepository {
    async fn load(&self) -> Result<Progress> {
        let storage = self.storage.lock().await;
        let documents: Vec<Progress> = storage.query("progress")?;
        Ok(documents.into_iter().next().unwrap_or_default())
    }

    async fn save(&self, progress: &Progress) -> Result<()> {
        let storage = self.storage.clone();
        let progress = progress.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save("progress", vec![progress])
                .map_err(|e| CyquestError::data_access(format!("Failed to save progress: {}", e)))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }
}
