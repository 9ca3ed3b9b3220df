//! Canned demo profiles.
//!
//! Every admitted session of a given role sees the same profile: students
//! are "Alex Chen", teachers are "Sarah Johnson", corporate admins are
//! "Morgan Reyes". The persisted record's own identity fields are
//! deliberately not consulted.

use crate::profile::model::{DemoProfile, RoleStats};
use crate::role::Role;

/// Returns the canned profile for `role`.
pub fn demo_profile(role: Role) -> DemoProfile {
    match role {
        Role::Student => DemoProfile {
            name: "Alex Chen".to_string(),
            title: "Security Apprentice".to_string(),
            role,
            level: 12,
            xp: 8_450,
            streak_days: 14,
            stats: RoleStats::Student {
                courses_completed: 7,
                badges_earned: 23,
                class_rank: 3,
            },
        },
        Role::Teacher => DemoProfile {
            name: "Sarah Johnson".to_string(),
            title: "Lead Instructor".to_string(),
            role,
            level: 31,
            xp: 52_300,
            streak_days: 42,
            stats: RoleStats::Teacher {
                classes: 4,
                students: 112,
                avg_completion_percent: 78,
            },
        },
        Role::Corporate => DemoProfile {
            name: "Morgan Reyes".to_string(),
            title: "Security Awareness Manager".to_string(),
            role,
            level: 19,
            xp: 21_700,
            streak_days: 9,
            stats: RoleStats::Corporate {
                team_size: 56,
                compliance_percent: 91,
                open_risks: 5,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_profile_role_matches_request() {
        for role in Role::iter() {
            assert_eq!(demo_profile(role).role, role);
        }
    }

    #[test]
    fn test_student_fixture_is_alex_chen() {
        let profile = demo_profile(Role::Student);
        assert_eq!(profile.name, "Alex Chen");
        assert!(matches!(profile.stats, RoleStats::Student { .. }));
    }

    #[test]
    fn test_teacher_fixture_is_sarah_johnson() {
        let profile = demo_profile(Role::Teacher);
        assert_eq!(profile.name, "Sarah Johnson");
        assert!(matches!(profile.stats, RoleStats::Teacher { .. }));
    }
}
