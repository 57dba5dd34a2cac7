//! # HelioCAD Plugins
//!
//! Runtime-loaded modules that contribute tabs next to the canvas.
//!
//! The [`PluginRegistry`] opens modules through a [`ModuleLoader`]
//! (shared libraries via `libloading` by default), calls their registration
//! entry point, and attaches or removes their tabs on a [`TabHost`] as they
//! are enabled and disabled.

pub mod contract;
pub mod loader;
pub mod registry;
pub mod tabs;

pub use contract::{AppHandle, HostHandle, PluginSurface, RegisterFn, ENTRY_POINT};
pub use loader::{LibraryLoader, ModuleLoader, PluginModule};
pub use registry::{plugin_name, LoadReport, PluginRecord, PluginRegistry};
pub use tabs::{capitalize, Tab, TabHost, TabId, TabStrip, CANVAS_TAB_LABEL};
