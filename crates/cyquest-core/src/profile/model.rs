//! Profile domain models.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Profile used to hydrate a surface after the gate admits a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoProfile {
    /// Full display name.
    pub name: String,
    /// Short descriptor shown under the name.
    pub title: String,
    /// The role this profile belongs to.
    pub role: Role,
    /// Gamification level.
    pub level: u32,
    /// Accumulated experience points.
    pub xp: u64,
    /// Consecutive active days.
    pub streak_days: u32,
    /// Role-specific headline statistics.
    pub stats: RoleStats,
}

/// Headline statistics that differ per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoleStats {
    /// Learner statistics.
    #[serde(rename_all = "camelCase")]
    Student {
        courses_completed: u32,
        badges_earned: u32,
        class_rank: u32,
    },
    /// Instructor statistics.
    #[serde(rename_all = "camelCase")]
    Teacher {
        classes: u32,
        students: u32,
        avg_completion_percent: u32,
    },
    /// Company administrator statistics.
    #[serde(rename_all = "camelCase")]
    Corporate {
        team_size: u32,
        compliance_percent: u32,
        open_risks: u32,
    },
}
