//! Configuration and settings management for SpaceKit
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (grid, history, transform steps)
//! - View settings (zoom limits, viewport size, pan modifier)
//! - UI preferences (window size, grid visibility)

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use spacekit_core::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_HISTORY_LIMIT, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
    MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use std::path::{Path, PathBuf};

/// Scene editing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing in world units
    pub grid_size: f64,
    /// Maximum number of undo snapshots
    pub history_limit: usize,
    /// Rotation applied by one rotate button press, in degrees
    pub rotation_step_degrees: f64,
    /// Factor applied by the enlarge button
    pub scale_step_up: f64,
    /// Factor applied by the shrink button
    pub scale_step_down: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            history_limit: DEFAULT_HISTORY_LIMIT,
            rotation_step_degrees: 90.0,
            scale_step_up: 1.1,
            scale_step_down: 0.9,
        }
    }
}

/// Modifier key that turns a primary-button drag on empty canvas into a pan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanModifier {
    #[default]
    Shift,
    Ctrl,
    Alt,
}

impl std::fmt::Display for PanModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shift => write!(f, "shift"),
            Self::Ctrl => write!(f, "ctrl"),
            Self::Alt => write!(f, "alt"),
        }
    }
}

/// Camera and viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Zoom change per wheel notch or toolbar click
    pub zoom_step: f64,
    /// Smallest allowed zoom
    pub min_zoom: f64,
    /// Largest allowed zoom
    pub max_zoom: f64,
    /// Canvas width in pixels
    pub viewport_width: f64,
    /// Canvas height in pixels
    pub viewport_height: f64,
    /// Modifier for primary-button panning
    pub pan_modifier: PanModifier,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            pan_modifier: PanModifier::default(),
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Draw grid lines on the canvas
    pub show_grid: bool,
    /// Number of recent files to track
    pub recent_files_count: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 1400,
            window_height: 900,
            show_grid: true,
            recent_files_count: 10,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent layout files, newest first
    pub recent_files: Vec<PathBuf>,
    /// Editing settings
    pub editor: EditorSettings,
    /// Camera settings
    pub view: ViewSettings,
    /// UI preferences
    pub ui: UiSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let editor = &self.editor;
        if !(editor.grid_size.is_finite() && editor.grid_size > 0.0) {
            return Err(ConfigError::out_of_range(
                "editor.grid_size",
                editor.grid_size,
            ));
        }
        if editor.history_limit == 0 {
            return Err(ConfigError::out_of_range("editor.history_limit", 0));
        }
        if !editor.rotation_step_degrees.is_finite() {
            return Err(ConfigError::out_of_range(
                "editor.rotation_step_degrees",
                editor.rotation_step_degrees,
            ));
        }
        for (key, step) in [
            ("editor.scale_step_up", editor.scale_step_up),
            ("editor.scale_step_down", editor.scale_step_down),
        ] {
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::out_of_range(key, step));
            }
        }

        let view = &self.view;
        if !(view.zoom_step.is_finite() && view.zoom_step > 0.0) {
            return Err(ConfigError::out_of_range("view.zoom_step", view.zoom_step));
        }
        if !(view.min_zoom.is_finite() && view.min_zoom > 0.0) {
            return Err(ConfigError::out_of_range("view.min_zoom", view.min_zoom));
        }
        if !(view.max_zoom.is_finite() && view.max_zoom >= view.min_zoom) {
            return Err(ConfigError::out_of_range("view.max_zoom", view.max_zoom));
        }
        if !(view.viewport_width > 0.0 && view.viewport_height > 0.0) {
            return Err(ConfigError::out_of_range(
                "view.viewport",
                format!("{}x{}", view.viewport_width, view.viewport_height),
            ));
        }

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(ConfigError::out_of_range(
                "ui.window",
                format!("{}x{}", self.ui.window_width, self.ui.window_height),
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.ui.recent_files_count);
    }
}
