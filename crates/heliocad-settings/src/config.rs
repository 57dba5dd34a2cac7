//! Configuration for HelioCAD
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into sections:
//! - UI preferences (color mode, window size)
//! - Canvas settings (grid spacing)
//! - Plugin settings (module directory, enabled modules)

use crate::error::{SettingsError, SettingsResult};
use heliocad_core::ColorMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Maximum number of entries kept in [`Config::recent_files`].
pub const MAX_RECENT_FILES: usize = 10;

/// Default plugin directory, relative to the working directory.
pub const DEFAULT_PLUGIN_DIR: &str = "modules";

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Light or dark theme
    pub color_mode: ColorMode,
    /// Main window width in pixels
    pub window_width: u32,
    /// Main window height in pixels
    pub window_height: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Light,
            window_width: 1000,
            window_height: 700,
        }
    }
}

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Snap grid spacing in canvas units
    pub grid_size: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self { grid_size: 20.0 }
    }
}

/// Plugin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Directory scanned for plugin modules at startup
    pub directory: PathBuf,
    /// Names of the modules the user has enabled
    pub enabled_modules: BTreeSet<String>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_PLUGIN_DIR),
            enabled_modules: BTreeSet::new(),
        }
    }
}

impl PluginSettings {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled_modules.contains(name)
    }
}

/// Complete application configuration
///
/// Missing sections or keys fall back to their defaults, so a file holding
/// only `{"enabled_modules": [...]}` under `plugins` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recently saved or opened documents, most recent first
    pub recent_files: Vec<PathBuf>,
    /// UI preferences
    pub ui: UiSettings,
    /// Canvas settings
    pub canvas: CanvasSettings,
    /// Plugin settings
    pub plugins: PluginSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from `content` in the format implied by `path`.
    pub fn parse(content: &str, path: &Path) -> SettingsResult<Self> {
        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(content)?,
            Format::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        Self::parse(&content, path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.canvas.grid_size.is_finite() && self.canvas.grid_size > 0.0) {
            return Err(SettingsError::invalid(
                "canvas.grid_size",
                "must be a positive number",
            ));
        }

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(SettingsError::invalid(
                "ui.window_size",
                "window dimensions must be > 0",
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    /// Replace the persisted set of enabled modules.
    pub fn set_enabled_modules<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins.enabled_modules = names.into_iter().map(Into::into).collect();
    }
}
