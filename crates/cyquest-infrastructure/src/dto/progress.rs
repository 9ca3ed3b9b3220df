//! Progress DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use cyquest_core::progress::Progress;

/// Progress document V1.0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct ProgressV1_0 {
    /// Accumulated experience points.
    pub xp: u64,
    /// Completed mission ids.
    pub missions_completed: Vec<String>,
}

impl IntoDomain<Progress> for ProgressV1_0 {
    fn into_domain(self) -> Progress {
        Progress::from_parts(self.xp, self.missions_completed)
    }
}

impl FromDomain<Progress> for ProgressV1_0 {
    fn from_domain(progress: Progress) -> Self {
        Self {
            xp: progress.xp,
            missions_completed: progress.completed_ids().map(str::to_string).collect(),
        }
    }
}

/// Creates and configures a Migrator instance for Progress documents.
pub fn create_progress_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let progress_path = version_migrate::Migrator::define("progress")
        .from::<ProgressV1_0>()
        .into_with_save::<Progress>();

    migrator
        .register(progress_path)
        .expect("Failed to register progress migration path");

    migrator
}
