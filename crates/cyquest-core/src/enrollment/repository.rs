//! Enrollment repository trait.

use async_trait::async_trait;

use crate::enrollment::model::EnrollmentList;
use crate::error::Result;

/// Persistence contract for the enrolled-course list.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Loads the enrollment list, falling back to empty.
    async fn load(&self) -> Result<EnrollmentList>;

    /// Saves the enrollment list.
    async fn save(&self, enrollments: &EnrollmentList) -> Result<()>;
}
