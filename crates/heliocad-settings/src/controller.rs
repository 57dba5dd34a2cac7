//! Settings Controller
//!
//! Draft state behind the settings dialog: the color mode selector and one
//! checkbox per loaded plugin. Checkbox changes are reported back to the
//! caller so the plugin can be enabled or disabled right away; the color
//! mode and the checked set only reach the store on [`SettingsController::commit`].

use crate::config::Config;
use crate::error::SettingsResult;
use crate::persistence::SettingsStore;
use heliocad_core::ColorMode;
use std::collections::BTreeSet;

/// One plugin row in the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCheckbox {
    pub name: String,
    pub checked: bool,
}

/// Controller for settings logic
#[derive(Debug, Clone)]
pub struct SettingsController {
    color_mode: ColorMode,
    modules: Vec<ModuleCheckbox>,
    has_unsaved_changes: bool,
}

impl SettingsController {
    /// Open the dialog for `loaded` plugin names. A plugin starts checked
    /// only if `config` lists it as enabled.
    pub fn open<I, S>(config: &Config, loaded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let modules = loaded
            .into_iter()
            .map(|name| {
                let name = name.into();
                let checked = config.plugins.is_enabled(&name);
                ModuleCheckbox { name, checked }
            })
            .collect();
        Self {
            color_mode: config.ui.color_mode,
            modules,
            has_unsaved_changes: false,
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if self.color_mode != mode {
            self.color_mode = mode;
            self.has_unsaved_changes = true;
        }
    }

    pub fn modules(&self) -> &[ModuleCheckbox] {
        &self.modules
    }

    pub fn is_checked(&self, name: &str) -> Option<bool> {
        self.modules.iter().find(|m| m.name == name).map(|m| m.checked)
    }

    /// Flip a checkbox. Returns `false` if `name` has no row.
    pub fn set_module_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.modules.iter_mut().find(|m| m.name == name) {
            Some(row) => {
                if row.checked != checked {
                    row.checked = checked;
                    self.has_unsaved_changes = true;
                }
                true
            }
            None => false,
        }
    }

    /// Names of the checked rows
    pub fn enabled_modules(&self) -> BTreeSet<String> {
        self.modules
            .iter()
            .filter(|m| m.checked)
            .map(|m| m.name.clone())
            .collect()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    /// Copy the draft into `config` and persist it.
    ///
    /// The enabled set is replaced by the checked rows, so names that were
    /// persisted but are no longer loaded are dropped.
    pub fn commit(&mut self, config: &mut Config, store: &dyn SettingsStore) -> SettingsResult<()> {
        let mut updated = config.clone();
        updated.ui.color_mode = self.color_mode;
        updated.plugins.enabled_modules = self.enabled_modules();
        store.save(&updated)?;
        *config = updated;
        self.has_unsaved_changes = false;
        Ok(())
    }
}
