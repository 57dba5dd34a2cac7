//! The editor session: canvas, tab strip, plugin registry and persisted
//! preferences wired together the way the main window uses them.
//!
//! Document actions (tool selection, save, load, SVG export) only apply
//! while the canvas tab is current, and report `false` otherwise.

use heliocad_core::{shared, ColorMode, PluginError, Result, Shared};
use heliocad_designer::{Canvas, Tool};
use heliocad_plugins::{
    AppHandle, HostHandle, LibraryLoader, LoadReport, ModuleLoader, PluginRegistry, TabHost,
    TabStrip,
};
use heliocad_settings::{Config, SettingsController, SettingsResult, SettingsStore};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::VERSION;

pub struct Session {
    config: Config,
    store: Box<dyn SettingsStore>,
    canvas: Shared<Canvas>,
    tabs: Shared<TabStrip>,
    plugins: PluginRegistry,
}

impl Session {
    /// Session loading plugins as shared libraries.
    pub fn new(config: Config, store: Box<dyn SettingsStore>) -> Self {
        Self::with_loader(config, store, Box::new(LibraryLoader))
    }

    pub fn with_loader(
        config: Config,
        store: Box<dyn SettingsStore>,
        loader: Box<dyn ModuleLoader>,
    ) -> Self {
        let mut canvas = Canvas::with_grid_size(config.canvas.grid_size);
        canvas.set_color_mode(config.ui.color_mode);
        let canvas = shared(canvas);

        let tabs = shared(TabStrip::new());
        let host_tabs: Shared<dyn TabHost> = tabs.clone();
        let app = AppHandle::new(VERSION, config.ui.color_mode);
        let host = HostHandle::new(app.window_title(), host_tabs);
        let plugins = PluginRegistry::with_loader(app, host, canvas.clone(), loader);

        Self {
            config,
            store,
            canvas,
            tabs,
            plugins,
        }
    }

    /// Load the configured plugin directory, then enable exactly the
    /// persisted modules.
    pub fn start(&mut self) -> LoadReport {
        let report = self.plugins.load_all(&self.config.plugins.directory);
        self.reconcile();
        info!(
            loaded = report.loaded.len(),
            failed = report.errors.len(),
            enabled = ?self.enabled_plugins(),
            "plugins ready"
        );
        report
    }

    /// Enable the loaded plugins listed in the persisted preferences and
    /// disable every other one.
    pub fn reconcile(&mut self) {
        self.plugins.reconcile(&self.config.plugins.enabled_modules);
    }

    /// `HelioCAD v<version>`
    pub fn title(&self) -> String {
        self.plugins.app().window_title()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn canvas(&self) -> &Shared<Canvas> {
        &self.canvas
    }

    pub fn tabs(&self) -> &Shared<TabStrip> {
        &self.tabs
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    pub fn color_mode(&self) -> ColorMode {
        self.config.ui.color_mode
    }

    fn enabled_plugins(&self) -> Vec<String> {
        self.plugins
            .names()
            .into_iter()
            .filter(|name| self.plugins.is_enabled(name))
            .collect()
    }

    fn canvas_active(&self) -> bool {
        self.tabs.borrow().is_canvas_current()
    }

    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if !self.canvas_active() {
            debug!(%tool, "tool change ignored outside the canvas tab");
            return false;
        }
        self.canvas.borrow_mut().set_tool(tool);
        true
    }

    /// Save the document as `.hcad`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        if !self.canvas_active() {
            return Ok(false);
        }
        self.canvas.borrow().save_hcad(path.as_ref())?;
        self.remember(path.as_ref());
        Ok(true)
    }

    /// Replace the document with the contents of a `.hcad` file. On error the
    /// current document is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        if !self.canvas_active() {
            return Ok(false);
        }
        self.canvas.borrow_mut().load_hcad(path.as_ref())?;
        self.remember(path.as_ref());
        Ok(true)
    }

    /// Export the document as SVG stroked for the persisted color mode.
    pub fn export_svg(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        if !self.canvas_active() {
            return Ok(false);
        }
        self.canvas
            .borrow()
            .export_svg(path.as_ref(), self.config.ui.color_mode)?;
        Ok(true)
    }

    fn remember(&mut self, path: &Path) {
        self.config.add_recent_file(path.to_path_buf());
        if let Err(e) = self.store.save(&self.config) {
            warn!("could not record recent file: {}", e);
        }
    }

    /// Load a single plugin at runtime. It stays disabled until enabled.
    pub fn load_plugin(&mut self, path: impl AsRef<Path>) -> std::result::Result<String, PluginError> {
        self.plugins.load(path)
    }

    /// Settings dialog model for the current preferences and loaded plugins.
    pub fn open_settings(&self) -> SettingsController {
        SettingsController::open(&self.config, self.plugins.names())
    }

    /// Apply a checkbox change from the settings dialog right away.
    pub fn toggle_module(&mut self, dialog: &mut SettingsController, name: &str, on: bool) -> bool {
        if !dialog.set_module_checked(name, on) {
            return false;
        }
        if on {
            self.plugins.enable(name)
        } else {
            self.plugins.disable(name)
        }
    }

    /// Persist the dialog's color mode and checked modules, then apply the
    /// color mode.
    pub fn commit_settings(&mut self, dialog: &mut SettingsController) -> SettingsResult<()> {
        dialog.commit(&mut self.config, self.store.as_ref())?;
        self.apply_color_mode(self.config.ui.color_mode);
        Ok(())
    }

    fn apply_color_mode(&mut self, mode: ColorMode) {
        self.canvas.borrow_mut().set_color_mode(mode);
        self.plugins.app_mut().set_color_mode(mode);
        info!(%mode, "color mode applied");
    }
}
