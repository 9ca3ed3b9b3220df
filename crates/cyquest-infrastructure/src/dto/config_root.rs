//! Application configuration DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use cyquest_core::config::{DebugSettings, EconomySettings, RootConfig};

/// Root configuration V1.0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ConfigRootV1_0 {
    #[serde(default)]
    pub economy: EconomySettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

impl IntoDomain<RootConfig> for ConfigRootV1_0 {
    fn into_domain(self) -> RootConfig {
        RootConfig {
            economy: self.economy,
            debug: self.debug,
        }
    }
}

impl FromDomain<RootConfig> for ConfigRootV1_0 {
    fn from_domain(config: RootConfig) -> Self {
        Self {
            economy: config.economy,
            debug: config.debug,
        }
    }
}

/// Creates and configures a Migrator instance for the root configuration.
pub fn create_config_root_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let config_path = version_migrate::Migrator::define("config_root")
        .from::<ConfigRootV1_0>()
        .into_with_save::<RootConfig>();

    migrator
        .register(config_path)
        .expect("Failed to register config_root migration path");

    migrator
}
