//! Profile resolution seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::profile::fixtures::demo_profile;
use crate::profile::model::DemoProfile;
use crate::session::SessionRecord;

/// Resolves the profile a surface is hydrated with after the gate admits
/// a session.
///
/// # Future Enhancements
/// - Fetch the real profile by the record's id from a backend
/// - Per-user customization of the demo fixtures
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Resolves the profile for an admitted session.
    async fn resolve(&self, record: &SessionRecord) -> Result<DemoProfile>;
}

/// Demo-mode resolver returning the canned per-role fixture.
///
/// The record's identity fields are intentionally ignored; only its role
/// selects the fixture. Swap this implementation out to wire a real
/// profile lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProfileResolver;

#[async_trait]
impl ProfileResolver for DemoProfileResolver {
    async fn resolve(&self, record: &SessionRecord) -> Result<DemoProfile> {
        Ok(demo_profile(record.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[tokio::test]
    async fn test_demo_resolver_ignores_record_identity() {
        let resolver = DemoProfileResolver;
        let record = SessionRecord::new(Role::Student, "Totally Custom Name");
        let profile = resolver.resolve(&record).await.unwrap();
        // Demo mode substitutes the canned fixture for the real identity.
        assert_eq!(profile.name, "Alex Chen");
    }
}
