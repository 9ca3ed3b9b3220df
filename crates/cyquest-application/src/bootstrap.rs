//! Wires the default file-backed stack into ready-to-use services.

use std::sync::Arc;

use cyquest_core::economy::EconomyStore;
use cyquest_core::enrollment::{EnrollmentRepository, demo_courses};
use cyquest_core::error::Result;
use cyquest_core::profile::DemoProfileResolver;
use cyquest_core::progress::{ProgressRepository, demo_missions};
use cyquest_core::shop::demo_catalog;
use cyquest_infrastructure::{
    ConfigService, FileEconomyStore, FileEnrollmentRepository, FileProgressRepository,
    FileSessionStore,
};

use crate::enrollment_service::EnrollmentService;
use crate::mission_service::MissionService;
use crate::session_usecase::SessionUseCase;
use crate::shop_service::ShopService;

/// The wired application services over the default storage locations.
pub struct AppContext {
    pub config: ConfigService,
    pub sessions: SessionUseCase,
    pub shop: ShopService,
    pub enrollments: EnrollmentService,
    pub missions: MissionService,
}

impl AppContext {
    /// Builds the full stack: config, file-backed repositories, services.
    pub async fn init() -> Result<Self> {
        let config_service = ConfigService::new();
        let config = config_service.get_config();

        let session_store = Arc::new(FileSessionStore::with_default_path()?);
        let economy_store: Arc<dyn EconomyStore> = Arc::new(FileEconomyStore::with_default_dir(
            config.economy.starting_coins,
        )?);
        let enrollment_repository: Arc<dyn EnrollmentRepository> =
            Arc::new(FileEnrollmentRepository::with_default_dir()?);
        let progress_repository: Arc<dyn ProgressRepository> =
            Arc::new(FileProgressRepository::with_default_dir()?);

        let sessions = SessionUseCase::new(session_store, Arc::new(DemoProfileResolver));
        let shop = ShopService::new(economy_store.clone(), demo_catalog()).await?;
        let enrollments = EnrollmentService::new(enrollment_repository, demo_courses());
        let missions = MissionService::new(economy_store, progress_repository, demo_missions());

        Ok(Self {
            config: config_service,
            sessions,
            shop,
            enrollments,
            missions,
        })
    }
}
