//! Plugin registry: discovery, loading and the enabled/disabled state of
//! every loaded plugin.
//!
//! A plugin goes `Unloaded -> Loaded{Disabled|Enabled}` and is never
//! unloaded. Every failure is caught here, logged and returned to the
//! caller; none of them takes the host down.

use heliocad_core::{PluginError, Shared};
use heliocad_designer::Canvas;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::contract::{AppHandle, HostHandle, PluginSurface, ENTRY_POINT};
use crate::loader::{LibraryLoader, ModuleLoader, PluginModule};
use crate::tabs::{capitalize, TabHost, TabId};

/// A loaded plugin.
pub struct PluginRecord {
    // Declared before `module`: the surface's code lives in the module, so
    // it has to be dropped first.
    surface: Option<Box<dyn PluginSurface>>,
    _module: Box<dyn PluginModule>,
    path: PathBuf,
    enabled: bool,
}

impl PluginRecord {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for PluginRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRecord")
            .field("path", &self.path)
            .field("has_surface", &self.has_surface())
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Outcome of [`PluginRegistry::load_all`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Names loaded successfully, in load order
    pub loaded: Vec<String>,
    /// Failures, in load order
    pub errors: Vec<PluginError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct PluginRegistry {
    app: AppHandle,
    host: HostHandle,
    canvas: Shared<Canvas>,
    loader: Box<dyn ModuleLoader>,
    plugins: BTreeMap<String, PluginRecord>,
}

impl PluginRegistry {
    /// Registry loading shared libraries from disk.
    pub fn new(app: AppHandle, host: HostHandle, canvas: Shared<Canvas>) -> Self {
        Self::with_loader(app, host, canvas, Box::new(LibraryLoader))
    }

    pub fn with_loader(
        app: AppHandle,
        host: HostHandle,
        canvas: Shared<Canvas>,
        loader: Box<dyn ModuleLoader>,
    ) -> Self {
        Self {
            app,
            host,
            canvas,
            loader,
            plugins: BTreeMap::new(),
        }
    }

    pub fn app(&self) -> &AppHandle {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut AppHandle {
        &mut self.app
    }

    /// Load one plugin module and return its name.
    ///
    /// A plugin with the same name replaces the earlier record; its tab, if
    /// attached, is removed first.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<String, PluginError> {
        let path = path.as_ref();
        let result = self.try_load(path);
        if let Err(err) = &result {
            warn!("{}", err);
        }
        result
    }

    fn try_load(&mut self, path: &Path) -> Result<String, PluginError> {
        if !path.is_file() {
            return Err(PluginError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let name = plugin_name(path);

        let module = self.loader.open(path).map_err(|cause| PluginError::Load {
            name: name.clone(),
            cause,
        })?;
        let register = module.entry_point().ok_or_else(|| PluginError::Contract {
            name: name.clone(),
            entry_point: ENTRY_POINT.to_string(),
        })?;

        let (app, host, canvas) = (&self.app, &self.host, &self.canvas);
        let surface = panic::catch_unwind(AssertUnwindSafe(|| register(app, host, canvas)))
            .map_err(|payload| PluginError::Load {
                name: name.clone(),
                cause: panic_message(payload.as_ref()),
            })?;

        if self.plugins.contains_key(&name) {
            warn!(plugin = %name, path = %path.display(), "plugin name already loaded, replacing");
            self.detach(&name);
        }
        self.plugins.insert(
            name.clone(),
            PluginRecord {
                surface,
                _module: module,
                path: path.to_path_buf(),
                enabled: false,
            },
        );
        info!(plugin = %name, "Plugin loaded");
        Ok(name)
    }

    /// Load every module with the loader's extension in `directory`, in
    /// directory enumeration order.
    pub fn load_all(&mut self, directory: impl AsRef<Path>) -> LoadReport {
        let directory = directory.as_ref();
        let mut report = LoadReport::default();

        let entries = match std::fs::read_dir(directory) {
            Ok(entries) if directory.is_dir() => entries,
            _ => {
                let err = PluginError::DirectoryNotFound {
                    path: directory.to_path_buf(),
                };
                warn!("{}", err);
                report.errors.push(err);
                return report;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!(directory = %directory.display(), "skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() || !self.has_module_extension(&path) {
                continue;
            }
            match self.load(&path) {
                Ok(name) => report.loaded.push(name),
                Err(err) => report.errors.push(err),
            }
        }

        debug!(
            directory = %directory.display(),
            loaded = report.loaded.len(),
            failed = report.errors.len(),
            "plugin directory scanned"
        );
        report
    }

    fn has_module_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.loader.extension())
    }

    /// Attach and show the plugin's tab. Returns `false` for unknown names
    /// and plugins without a surface.
    pub fn enable(&mut self, name: &str) -> bool {
        let Some(record) = self.plugins.get_mut(name) else {
            return false;
        };
        let Some(surface) = record.surface.as_mut() else {
            return false;
        };

        {
            let id = TabId::Plugin(name.to_string());
            let mut tabs = self.host.tabs().borrow_mut();
            if tabs.index_of(&id).is_none() {
                tabs.add_tab(id, capitalize(name));
            }
        }
        surface.show();
        record.enabled = true;
        info!(plugin = %name, "Enabled plugin");
        true
    }

    /// Remove the plugin's tab. Returns `false` for unknown names and
    /// plugins without a surface.
    pub fn disable(&mut self, name: &str) -> bool {
        let Some(record) = self.plugins.get_mut(name) else {
            return false;
        };
        if record.surface.is_none() {
            return false;
        }
        record.enabled = false;
        self.detach(name);
        info!(plugin = %name, "Disabled plugin");
        true
    }

    fn detach(&self, name: &str) {
        let id = TabId::Plugin(name.to_string());
        let mut tabs = self.host.tabs().borrow_mut();
        if let Some(index) = tabs.index_of(&id) {
            tabs.remove_tab(index);
        }
    }

    /// Enable exactly the loaded plugins named in `enabled`; disable the rest.
    /// Unknown names in `enabled` are ignored.
    pub fn reconcile(&mut self, enabled: &BTreeSet<String>) {
        for name in self.names() {
            if enabled.contains(&name) {
                self.enable(&name);
            } else {
                self.disable(&name);
            }
        }
    }

    /// Loaded plugin names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&PluginRecord> {
        self.plugins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.plugins.get(name).is_some_and(PluginRecord::is_enabled)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Plugin name: the module's file stem.
pub fn plugin_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("register panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("register panicked: {}", msg)
    } else {
        "register panicked".to_string()
    }
}
