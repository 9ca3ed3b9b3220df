//! File-backed enrollment repository.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

use cyquest_core::enrollment::{EnrollmentList, EnrollmentRepository};
use cyquest_core::error::{CyquestError, Result};

use crate::dto::create_enrollments_migrator;
use crate::paths::CyquestPaths;

/// Enrollment repository persisting the enrolled-course list as one
/// document.
#[derive(Clone)]
pub struct FileEnrollmentRepository {
    storage: Arc<Mutex<FileStorage>>,
}

impl FileEnrollmentRepository {
    /// Creates a repository rooted at `state_dir`.
    pub fn new(state_dir: &Path) -> Result<Self> {
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Json)
            .with_load_behavior(LoadBehavior::SaveIfMissing)
            .with_default_value(serde_json::to_value(EnrollmentList::default())?);

        let storage = FileStorage::new(
            state_dir.join("enrollments.json"),
            create_enrollments_migrator(),
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
impl EnrollmentRepository for FileEnrollmentRepository {
    async fn load(&self) -> Result<EnrollmentList> {
        let storage = self.storage.lock().await;
        let lists: Vec<EnrollmentList> = storage.query("enrollments")?;
        Ok(lists.into_iter().next().unwrap_or_default())
    }

    async fn save(&self, enrollments: &EnrollmentList) -> Result<()> {
        let storage = self.storage.clone();
        let enrollments = enrollments.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save("enrollments", vec![enrollments])
                .map_err(|e| {
                    CyquestError::data_access(format!("Failed to save enrollments: {}", e))
                })
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = FileEnrollmentRepository::new(dir.path()).unwrap();

        let mut list = repo.load().await.unwrap();
        assert!(list.is_empty());

        list.enroll("phishing-defense").unwrap();
        repo.save(&list).await.unwrap();

        let reopened = FileEnrollmentRepository::new(dir.path()).unwrap();
        let loaded = reopened.load().await.unwrap();
        assert!(loaded.contains("phishing-defense"));
    }
}
