//! Application configuration models.

use serde::{Deserialize, Serialize};
use version_migrate::DeriveQueryable as Queryable;

use crate::economy::DEFAULT_STARTING_COINS;

/// Economy tuning knobs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EconomySettings {
    /// Coins a fresh account starts with.
    #[serde(default = "default_starting_coins")]
    pub starting_coins: u64,
}

fn default_starting_coins() -> u64 {
    DEFAULT_STARTING_COINS
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            starting_coins: default_starting_coins(),
        }
    }
}

/// Debug/diagnostics settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    /// Log level filter ("error", "warn", "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Root of the application configuration file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default, Queryable)]
#[queryable(entity = "config_root")]
pub struct RootConfig {
    #[serde(default)]
    pub economy: EconomySettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RootConfig::default();
        assert_eq!(config.economy.starting_coins, DEFAULT_STARTING_COINS);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [debug]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.debug.log_level, "debug");
        assert_eq!(config.economy.starting_coins, DEFAULT_STARTING_COINS);
    }
}
