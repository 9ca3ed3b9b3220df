//! Enrollment service implementation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use cyquest_core::enrollment::{Course, EnrollError, EnrollmentList, EnrollmentRepository};
use cyquest_core::error::CyquestError;

/// Errors surfaced by enrollment operations.
#[derive(Error, Debug)]
pub enum EnrollmentServiceError {
    /// The operation was rejected by the enrollment rules.
    #[error(transparent)]
    Rejected(#[from] EnrollError),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] CyquestError),
}

/// Service for course enrollment.
pub struct EnrollmentService {
    /// Repository for the enrolled-course list.
    repository: Arc<dyn EnrollmentRepository>,
    /// Courses the ids resolve against.
    courses: Vec<Course>,
}

impl EnrollmentService {
    /// Creates the service over `courses`.
    pub fn new(repository: Arc<dyn EnrollmentRepository>, courses: Vec<Course>) -> Self {
        Self {
            repository,
            courses,
        }
    }

    /// The course catalog.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn validate(&self, course_id: &str) -> Result<(), EnrollError> {
        if self.courses.iter().any(|c| c.id == course_id) {
            Ok(())
        } else {
            Err(EnrollError::UnknownCourse(course_id.to_string()))
        }
    }

    /// Enrolls in a course by id.
    pub async fn enroll(&self, course_id: &str) -> Result<(), EnrollmentServiceError> {
        self.validate(course_id)?;

        let mut enrollments = self.repository.load().await?;
        if let Err(rejection) = enrollments.enroll(course_id) {
            warn!(course = course_id, %rejection, "enrollment rejected");
            return Err(rejection.into());
        }
        self.repository.save(&enrollments).await?;
        info!(course = course_id, "enrolled");
        Ok(())
    }

    /// Drops a course by id.
    pub async fn drop_course(&self, course_id: &str) -> Result<(), EnrollmentServiceError> {
        self.validate(course_id)?;

        let mut enrollments = self.repository.load().await?;
        if let Err(rejection) = enrollments.drop_course(course_id) {
            warn!(course = course_id, %rejection, "drop rejected");
            return Err(rejection.into());
        }
        self.repository.save(&enrollments).await?;
        info!(course = course_id, "dropped");
        Ok(())
    }

    /// The current enrollment list.
    pub async fn list(&self) -> Result<EnrollmentList, CyquestError> {
        self.repository.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyquest_core::enrollment::demo_courses;
    use cyquest_core::error::Result;
    use std::sync::Mutex;

    // Mock EnrollmentRepository for testing
    #[derive(Default)]
    struct MockEnrollmentRepository {
        list: Mutex<EnrollmentList>,
    }

    #[async_trait::async_trait]
    impl EnrollmentRepository for MockEnrollmentRepository {
        async fn load(&self) -> Result<EnrollmentList> {
            Ok(self.list.lock().unwrap().clone())
        }

        async fn save(&self, enrollments: &EnrollmentList) -> Result<()> {
            *self.list.lock().unwrap() = enrollments.clone();
            Ok(())
        }
    }

    fn service() -> EnrollmentService {
        EnrollmentService::new(Arc::new(MockEnrollmentRepository::default()), demo_courses())
    }

    #[tokio::test]
    async fn test_enroll_and_list() {
        let service = service();
        service.enroll("phishing-defense").await.unwrap();

        let list = service.list().await.unwrap();
        assert!(list.contains("phishing-defense"));
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_course_rejected() {
        let service = service();
        let err = service.enroll("underwater-basket-weaving").await.unwrap_err();
        assert!(matches!(
            err,
            EnrollmentServiceError::Rejected(EnrollError::UnknownCourse(_))
        ));
    }

    #[tokio::test]
    async fn test_double_enroll_rejected() {
        let service = service();
        service.enroll("network-basics").await.unwrap();
        let err = service.enroll("network-basics").await.unwrap_err();
        assert!(matches!(
            err,
            EnrollmentServiceError::Rejected(EnrollError::AlreadyEnrolled(_))
        ));
    }

    #[tokio::test]
    async fn test_drop_requires_enrollment() {
        let service = service();
        let err = service.drop_course("network-basics").await.unwrap_err();
        assert!(matches!(
            err,
            EnrollmentServiceError::Rejected(EnrollError::NotEnrolled(_))
        ));
    }
}
