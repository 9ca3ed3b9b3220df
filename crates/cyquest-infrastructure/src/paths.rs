//! Unified path management for CyQuest state files.
//!
//! All CyQuest configuration and persisted state documents are resolved
//! via AppPaths from the version-migrate crate for consistency across
//! platforms (Linux, macOS, Windows).

use std::path::PathBuf;
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for CyQuest.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/cyquest/           # Config directory (AppPaths default)
/// ├── config.toml              # Application configuration
/// ├── session.json             # Current session record (atomic JSON store)
/// └── state/                   # Independent state documents
///     ├── wallet.json
///     ├── inventory.json
///     ├── loadout.json
///     ├── enrollments.json
///     └── progress.json
/// ```
pub struct CyquestPaths;

impl CyquestPaths {
    /// Returns a configured AppPaths instance for CyQuest.
    fn app_paths() -> AppPaths {
        AppPaths::new("cyquest")
    }

    /// Returns the CyQuest configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/cyquest/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the session record file.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }

    /// Returns the directory holding the independent state documents.
    pub fn state_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("state"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = CyquestPaths::config_dir().unwrap();
        // AppPaths returns the platform config directory with "cyquest" appended
        assert!(config_dir.ends_with("cyquest"));
    }

    #[test]
    fn test_config_file() {
        let config_file = CyquestPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = CyquestPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_session_file() {
        let session_file = CyquestPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.json"));
        let config_dir = CyquestPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }

    #[test]
    fn test_state_dir() {
        let state_dir = CyquestPaths::state_dir().unwrap();
        assert!(state_dir.ends_with("state"));
        let config_dir = CyquestPaths::config_dir().unwrap();
        assert!(state_dir.starts_with(&config_dir));
    }
}
