pub mod courses;
pub mod missions;
pub mod session;
pub mod shop;

use anyhow::Result;

use cyquest_application::{AppContext, Authorization};
use cyquest_core::Role;
use cyquest_core::profile::DemoProfile;

/// Runs the session gate for a student surface.
///
/// Returns the hydrated profile, or `None` after printing the redirect
/// notice (the caller stops there, mirroring the page-level contract).
pub(crate) async fn gate_student(ctx: &AppContext) -> Result<Option<DemoProfile>> {
    match ctx.sessions.authorize(Role::Student).await? {
        Authorization::Granted(profile) => Ok(Some(profile)),
        Authorization::Denied { reason, .. } => {
            println!("🔒 {} - redirecting to login", reason);
            println!("💡 Try: cyquest login student");
            Ok(None)
        }
    }
}
