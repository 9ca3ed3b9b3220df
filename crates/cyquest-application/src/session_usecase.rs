//! Session use case implementation.
//!
//! This module provides the `SessionUseCase` which orchestrates the
//! session store, the role gate and profile resolution so that every
//! protected surface goes through one authorization path.

use std::sync::Arc;

use tracing::{info, warn};

use cyquest_core::error::Result;
use cyquest_core::profile::{DemoProfile, ProfileResolver};
use cyquest_core::role::Role;
use cyquest_core::session::{GateError, Route, SessionGate, SessionRecord, SessionStore};

/// Outcome of authorizing a protected surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Authorization {
    /// The session may hydrate the surface with this profile.
    Granted(DemoProfile),
    /// The session was rejected; the caller should navigate to `redirect`.
    Denied {
        /// Why the gate refused.
        reason: GateError,
        /// Where to send the user.
        redirect: Route,
    },
}

/// Use case for session lifecycle and surface authorization.
///
/// # Responsibilities
///
/// - Writing the session record at login and clearing it at logout
/// - Gating protected surfaces on their required role
/// - Resolving the post-gate profile through the [`ProfileResolver`] seam
///
/// Infrastructure faults (storage errors) surface as `CyquestError`;
/// gate rejections are data, not errors, so callers can render feedback
/// and navigate.
pub struct SessionUseCase {
    /// Store for the persisted session record
    session_store: Arc<dyn SessionStore>,
    /// Resolver for the post-gate profile
    profile_resolver: Arc<dyn ProfileResolver>,
}

impl SessionUseCase {
    /// Creates a new `SessionUseCase` instance.
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        profile_resolver: Arc<dyn ProfileResolver>,
    ) -> Self {
        Self {
            session_store,
            profile_resolver,
        }
    }

    /// Logs in as `role`, overwriting any existing record.
    ///
    /// The display name defaults to the role name when not provided.
    pub async fn login(&self, role: Role, display_name: Option<String>) -> Result<SessionRecord> {
        let display_name = display_name.unwrap_or_else(|| role.to_string());
        let record = SessionRecord::new(role, display_name);
        self.session_store.save(&record).await?;
        info!(role = %role, id = %record.id, "session started");
        Ok(record)
    }

    /// Logs out, clearing the record. Idempotent.
    pub async fn logout(&self) -> Result<()> {
        self.session_store.clear().await?;
        info!("session cleared");
        Ok(())
    }

    /// The raw current record, without any role check.
    pub async fn current(&self) -> Result<Option<SessionRecord>> {
        self.session_store.load().await
    }

    /// Authorizes a surface requiring `required`.
    ///
    /// On success the returned profile is the canned demo fixture for the
    /// role - the record's own identity fields are not consulted.
    pub async fn authorize(&self, required: Role) -> Result<Authorization> {
        let record = self.session_store.load().await?;
        let gate = SessionGate::new(required);

        match gate.evaluate(record.as_ref()) {
            Ok(()) => {
                // evaluate() only passes when a record is present.
                let record = record.ok_or_else(|| {
                    cyquest_core::CyquestError::internal("gate passed without a record")
                })?;
                let profile = self.profile_resolver.resolve(&record).await?;
                info!(role = %required, profile = %profile.name, "surface authorized");
                Ok(Authorization::Granted(profile))
            }
            Err(reason) => {
                warn!(role = %required, %reason, "surface rejected");
                Ok(Authorization::Denied {
                    redirect: reason.redirect(),
                    reason,
                })
            }
        }
    }
}
