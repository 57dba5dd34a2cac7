//! Config directory resolution.

use crate::error::{SettingsError, SettingsResult};
use std::path::PathBuf;

/// Application directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "heliocad";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Locates the platform-specific settings location.
pub struct SettingsManager;

impl SettingsManager {
    /// `<platform config dir>/heliocad`
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "no configuration directory on this platform".to_string(),
                )
            })
    }

    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_path_layout() {
        // Some CI containers have no config dir at all.
        if let Ok(path) = SettingsManager::config_file_path() {
            assert!(path.ends_with("heliocad/config.json"));
        }
    }
}
