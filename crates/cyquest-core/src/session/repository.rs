//! Session store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::SessionRecord;

/// Persistence contract for the single session record.
///
/// There is at most one record at a time; saving overwrites any existing
/// record, clearing is idempotent.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the current record, if any.
    async fn load(&self) -> Result<Option<SessionRecord>>;

    /// Saves `record`, replacing any existing one.
    async fn save(&self, record: &SessionRecord) -> Result<()>;

    /// Removes the record if present.
    async fn clear(&self) -> Result<()>;
}
