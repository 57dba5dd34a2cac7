//! Settings Persistence
//!
//! Storage adapters for [`Config`]. The application reads its preferences
//! once at startup and writes them back when the settings dialog is
//! committed; nothing else touches the store.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use crate::manager::SettingsManager;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where persisted preferences live.
pub trait SettingsStore {
    /// Read the stored configuration. An empty store yields defaults.
    fn load(&self) -> SettingsResult<Config>;

    /// Replace the stored configuration.
    fn save(&self, config: &Config) -> SettingsResult<()>;
}

/// File-backed store (JSON or TOML by extension).
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<platform config dir>/heliocad/config.json`.
    pub fn at_default_location() -> SettingsResult<Self> {
        Ok(Self::new(SettingsManager::config_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> SettingsResult<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Config::default());
        }
        let config = Config::load_from_file(&self.path)?;
        info!(path = %self.path.display(), "loaded settings");
        Ok(config)
    }

    fn save(&self, config: &Config) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        config.save_to_file(&self.path)?;
        info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// In-memory store, used by tests and headless sessions.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    config: RefCell<Config>,
    saves: Cell<usize>,
}

impl MemorySettingsStore {
    pub fn new(config: Config) -> Self {
        Self {
            config: RefCell::new(config),
            saves: Cell::new(0),
        }
    }

    /// Current stored configuration.
    pub fn snapshot(&self) -> Config {
        self.config.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> SettingsResult<Config> {
        Ok(self.config.borrow().clone())
    }

    fn save(&self, config: &Config) -> SettingsResult<()> {
        config.validate()?;
        *self.config.borrow_mut() = config.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Open the preferences for a session.
///
/// Falls back to an in-memory store when `location` could not be resolved
/// or its file cannot be read, so a broken settings file is never
/// overwritten by a later save.
pub fn open_store(location: SettingsResult<FileSettingsStore>) -> (Config, Box<dyn SettingsStore>) {
    let store = match location {
        Ok(store) => store,
        Err(e) => {
            warn!("settings will not be saved this session: {}", e);
            return (Config::default(), Box::new(MemorySettingsStore::default()));
        }
    };
    match store.load() {
        Ok(config) => (config, Box::new(store)),
        Err(e) => {
            warn!(
                path = %store.path().display(),
                "ignoring unreadable settings, changes will not be saved this session: {}",
                e
            );
            (Config::default(), Box::new(MemorySettingsStore::default()))
        }
    }
}
