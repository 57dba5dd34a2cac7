//! HelioCAD Settings Crate
//!
//! Handles application configuration, persisted preferences and the
//! settings dialog model.

pub mod config;
pub mod controller;
pub mod error;
pub mod manager;
pub mod persistence;

pub use config::{
    CanvasSettings, Config, PluginSettings, UiSettings, DEFAULT_PLUGIN_DIR, MAX_RECENT_FILES,
};
pub use controller::{ModuleCheckbox, SettingsController};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
pub use persistence::{open_store, FileSettingsStore, MemorySettingsStore, SettingsStore};
