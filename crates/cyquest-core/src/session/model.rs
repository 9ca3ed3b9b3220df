//! Session record domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// The persisted record identifying the current session's claimed role.
///
/// Written at login, read on every protected surface, cleared at logout.
/// Only `role` is consulted by the gate; every other field is opaque
/// payload that is carried along untouched. The record is client-writable
/// and carries no signature or expiry - it is not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Unique record identifier (UUID format).
    pub id: String,
    /// The role this session claims.
    pub role: Role,
    /// Display name chosen at login. Not consulted by the gate.
    pub display_name: String,
    /// When the record was written.
    pub issued_at: DateTime<Utc>,
    /// Unknown fields from older or foreign writers, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionRecord {
    /// Creates a fresh record for the given role.
    pub fn new(role: Role, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            display_name: display_name.into(),
            issued_at: Utc::now(),
            extra: serde_json::Map::new(),
        }
    }
}
