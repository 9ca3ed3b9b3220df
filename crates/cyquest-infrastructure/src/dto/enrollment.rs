//! Enrollment DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use cyquest_core::enrollment::EnrollmentList;

/// Enrollments document V1.0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentsV1_0 {
    /// Enrolled course ids.
    pub courses: Vec<String>,
}

impl IntoDomain<EnrollmentList> for EnrollmentsV1_0 {
    fn into_domain(self) -> EnrollmentList {
        EnrollmentList::from_ids(self.courses)
    }
}

impl FromDomain<EnrollmentList> for EnrollmentsV1_0 {
    fn from_domain(enrollments: EnrollmentList) -> Self {
        Self {
            courses: enrollments.ids().map(str::to_string).collect(),
        }
    }
}

/// Creates and configures a Migrator instance for Enrollments documents.
pub fn create_enrollments_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let enrollments_path = version_migrate::Migrator::define("enrollments")
        .from::<EnrollmentsV1_0>()
        .into_with_save::<EnrollmentList>();

    migrator
        .register(enrollments_path)
        .expect("Failed to register enrollments migration path");

    migrator
}
