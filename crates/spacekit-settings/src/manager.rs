//! Settings manager
//!
//! Locates the settings file in the platform config directory and keeps the
//! loaded [`Config`] for the running session.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "spacekit";
const CONFIG_FILE: &str = "settings.json";

/// Owns the editor configuration and where it is stored
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// Platform config directory for SpaceKit (e.g. `~/.config/spacekit`)
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Full path of the default settings file
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the config directory if it does not exist
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load_default() -> SettingsResult<Self> {
        Ok(Self::load_or_default(Self::config_file_path()?))
    }

    /// Load settings from `path`, falling back to defaults
    ///
    /// A missing file is normal on first run. A file that exists but does not
    /// parse or validate is logged and replaced by defaults in memory; it is
    /// not overwritten until the next `save`.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = if path.exists() {
            match Config::load_from_file(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded settings from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Ignoring settings file {}: {}; using defaults",
                        path.display(),
                        e
                    );
                    Config::default()
                }
            }
        } else {
            Config::default()
        };
        Self { config, path }
    }

    /// Load settings from `path`, failing on any error
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Write the current settings back to their file
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(&self.path)?;
        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
