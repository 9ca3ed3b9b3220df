//! Application layer for CyQuest.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level business logic.

pub mod bootstrap;
pub mod enrollment_service;
pub mod mission_service;
pub mod session_usecase;
pub mod shop_service;

pub use bootstrap::AppContext;
pub use enrollment_service::{EnrollmentService, EnrollmentServiceError};
pub use mission_service::{CompletionReward, MissionService, MissionServiceError};
pub use session_usecase::{Authorization, SessionUseCase};
pub use shop_service::{ShopService, ShopServiceError, ShopStatus};
