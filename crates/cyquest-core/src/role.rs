//! Role types for session gating.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The role claimed by a session.
///
/// Every protected surface declares exactly one required role; the session
/// gate compares the persisted record's role against it. Roles are flat -
/// there is no hierarchy and no cross-role access.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Learner account (courses, quizzes, shop, XP progression).
    Student,
    /// Instructor account (class management, assignment review).
    Teacher,
    /// Company administrator account (team risk and compliance views).
    Corporate,
}
