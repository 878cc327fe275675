//! SpaceKit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, EditorSettings, PanModifier, UiSettings, ViewSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
