//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/cyquest/config.toml).

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

use cyquest_core::config::RootConfig;

use crate::dto::create_config_root_migrator;
use crate::paths::CyquestPaths;

/// Configuration service that loads and caches the root configuration.
///
/// This implementation reads the configuration from config.toml
/// and caches it to avoid repeated file I/O operations.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file path; None resolves the default location.
    path_override: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService reading the default config file.
    ///
    /// The configuration is loaded lazily on first access to avoid
    /// blocking during initialization.
    pub fn new() -> Self {
        Self {
            path_override: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path_override: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    pub fn get_config(&self) -> RootConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_default();

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads RootConfig from the config file using FileStorage.
    fn load_config(&self) -> Result<RootConfig, String> {
        let config_path = self.get_config_path()?;

        let migrator = create_config_root_migrator();
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Toml)
            .with_load_behavior(LoadBehavior::CreateIfMissing);

        let mut storage = FileStorage::new(config_path, migrator, strategy)
            .map_err(|e| format!("Failed to create FileStorage: {}", e))?;

        let configs: Vec<RootConfig> = storage
            .query("config_root")
            .map_err(|e| format!("Failed to query config_root: {}", e))?;

        if configs.is_empty() {
            let default_config = RootConfig::default();
            storage
                .update_and_save("config_root", vec![default_config.clone()])
                .map_err(|e| format!("Failed to save default config: {}", e))?;
            Ok(default_config)
        } else {
            Ok(configs.into_iter().next().unwrap_or_default())
        }
    }

    fn get_config_path(&self) -> Result<PathBuf, String> {
        if let Some(path) = &self.path_override {
            return Ok(path.clone());
        }
        CyquestPaths::config_file().map_err(|e| e.to_string())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyquest_core::economy::DEFAULT_STARTING_COINS;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        let config = service.get_config();
        assert_eq!(config.economy.starting_coins, DEFAULT_STARTING_COINS);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cache_survives_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        let first = service.get_config();
        let second = service.get_config();
        assert_eq!(first, second);
        service.invalidate_cache();
        let third = service.get_config();
        assert_eq!(first, third);
    }
}
