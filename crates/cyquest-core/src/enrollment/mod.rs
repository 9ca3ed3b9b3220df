//! Course enrollment domain: the demo course catalog and the persisted
//! enrolled-course list.

mod model;
mod repository;

pub use model::{Course, EnrollError, EnrollmentList, demo_courses};
pub use repository::EnrollmentRepository;
