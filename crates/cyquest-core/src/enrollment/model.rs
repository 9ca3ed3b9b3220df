//! Enrollment domain models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use version_migrate::DeriveQueryable as Queryable;

/// Why an enrollment operation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollError {
    /// The id does not exist in the course catalog.
    #[error("unknown course '{0}'")]
    UnknownCourse(String),

    /// Enrollment in a course the account is already enrolled in.
    #[error("already enrolled in '{0}'")]
    AlreadyEnrolled(String),

    /// Drop of a course the account is not enrolled in.
    #[error("not enrolled in '{0}'")]
    NotEnrolled(String),
}

/// A course in the demo catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identity.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Rough difficulty from 1 (intro) to 3 (advanced).
    pub difficulty: u8,
}

/// The persisted list of enrolled course ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Queryable)]
#[queryable(entity = "enrollments")]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentList {
    courses: BTreeSet<String>,
}

impl EnrollmentList {
    /// Builds a list from stored ids (persistence layer).
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            courses: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `course_id` is enrolled.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.contains(course_id)
    }

    /// Records an enrollment.
    pub fn enroll(&mut self, course_id: impl Into<String>) -> Result<(), EnrollError> {
        let course_id = course_id.into();
        if !self.courses.insert(course_id.clone()) {
            return Err(EnrollError::AlreadyEnrolled(course_id));
        }
        Ok(())
    }

    /// Removes an enrollment.
    pub fn drop_course(&mut self, course_id: &str) -> Result<(), EnrollError> {
        if !self.courses.remove(course_id) {
            return Err(EnrollError::NotEnrolled(course_id.to_string()));
        }
        Ok(())
    }

    /// Enrolled ids in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }

    /// Number of enrollments.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether nothing is enrolled.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// The built-in demo course catalog.
pub fn demo_courses() -> Vec<Course> {
    vec![
        Course {
            id: "phishing-defense".to_string(),
            title: "Phishing Defense Fundamentals".to_string(),
            difficulty: 1,
        },
        Course {
            id: "password-hygiene".to_string(),
            title: "Password Hygiene".to_string(),
            difficulty: 1,
        },
        Course {
            id: "network-basics".to_string(),
            title: "Network Security Basics".to_string(),
            difficulty: 2,
        },
        Course {
            id: "social-engineering".to_string(),
            title: "Social Engineering Tactics".to_string(),
            difficulty: 2,
        },
        Course {
            id: "incident-response".to_string(),
            title: "Incident Response Playbooks".to_string(),
            difficulty: 3,
        },
        Course {
            id: "crypto-essentials".to_string(),
            title: "Cryptography Essentials".to_string(),
            difficulty: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_and_drop() {
        let mut list = EnrollmentList::default();
        list.enroll("phishing-defense").unwrap();
        assert!(list.contains("phishing-defense"));

        let err = list.enroll("phishing-defense").unwrap_err();
        assert_eq!(
            err,
            EnrollError::AlreadyEnrolled("phishing-defense".to_string())
        );

        list.drop_course("phishing-defense").unwrap();
        assert!(list.is_empty());

        let err = list.drop_course("phishing-defense").unwrap_err();
        assert_eq!(err, EnrollError::NotEnrolled("phishing-defense".to_string()));
    }

    #[test]
    fn test_demo_courses_have_unique_ids() {
        let courses = demo_courses();
        let mut ids: Vec<_> = courses.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), courses.len());
    }
}
