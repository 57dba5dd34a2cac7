//! The interface between the host and a plugin module.
//!
//! A plugin is a `dylib` crate built against the same `heliocad-plugins`
//! version and compiler as the host. It exports one function under the
//! [`ENTRY_POINT`] name:
//!
//! ```ignore
//! use heliocad_plugins::{AppHandle, HostHandle, PluginSurface};
//! use heliocad_core::Shared;
//! use heliocad_designer::Canvas;
//!
//! #[no_mangle]
//! pub fn heliocad_register_plugin(
//!     app: &AppHandle,
//!     host: &HostHandle,
//!     canvas: &Shared<Canvas>,
//! ) -> Option<Box<dyn PluginSurface>> {
//!     Some(Box::new(Ruler::new(canvas.clone())))
//! }
//! ```

use heliocad_core::{ColorMode, Shared};
use heliocad_designer::Canvas;

use crate::tabs::TabHost;

/// Symbol every plugin module must export.
pub const ENTRY_POINT: &str = "heliocad_register_plugin";

/// Signature of [`ENTRY_POINT`].
pub type RegisterFn =
    fn(&AppHandle, &HostHandle, &Shared<Canvas>) -> Option<Box<dyn PluginSurface>>;

/// UI surface a plugin contributes as a tab.
pub trait PluginSurface {
    /// Called each time the plugin is enabled.
    fn show(&mut self);
}

/// Application-wide facts handed to plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppHandle {
    name: String,
    version: String,
    color_mode: ColorMode,
}

impl AppHandle {
    pub fn new(version: impl Into<String>, color_mode: ColorMode) -> Self {
        Self {
            name: "HelioCAD".to_string(),
            version: version.into(),
            color_mode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Color mode in effect when the plugin was registered.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    /// `HelioCAD v<version>`
    pub fn window_title(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}

/// Handle to the main window: its title and tab strip.
#[derive(Clone)]
pub struct HostHandle {
    title: String,
    tabs: Shared<dyn TabHost>,
}

impl HostHandle {
    pub fn new(title: impl Into<String>, tabs: Shared<dyn TabHost>) -> Self {
        Self {
            title: title.into(),
            tabs,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tabs(&self) -> &Shared<dyn TabHost> {
        &self.tabs
    }
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandle")
            .field("title", &self.title)
            .field("tabs", &self.tabs.try_borrow().map(|t| t.count()).ok())
            .finish()
    }
}
