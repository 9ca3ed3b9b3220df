//! Progress repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::progress::model::Progress;

/// Persistence contract for the progression document.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Loads progress, falling back to zero XP and no completions.
    async fn load(&self) -> Result<Progress>;

    /// Saves the progression document.
    async fn save(&self, progress: &Progress) -> Result<()>;
}
