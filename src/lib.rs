//! # HelioCAD
//!
//! A small 2D drawing editor: lines, rectangles and circles snapped to a
//! grid, saved as `.hcad` JSON, exported as SVG, with runtime-loaded plugins
//! that contribute tabs next to the canvas.
//!
//! ## Architecture
//!
//! HelioCAD is organized as a workspace with multiple crates:
//!
//! 1. **heliocad-core** - Error taxonomy, color theme, shared-state aliases
//! 2. **heliocad-designer** - Shapes, grid, draw state machine, `.hcad` and SVG codecs
//! 3. **heliocad-settings** - Configuration, persisted preferences, settings dialog model
//! 4. **heliocad-plugins** - Plugin contract, module loading, registry, tab strip
//! 5. **heliocad** - The session shell and the binary that integrates all crates

pub mod session;

pub use session::Session;

pub use heliocad_core::{CodecError, ColorMode, Error, PluginError, Result};
pub use heliocad_designer::{Canvas, DrawState, Point, Shape, Tool};
pub use heliocad_plugins::{LoadReport, PluginRegistry, TabId, TabStrip};
pub use heliocad_settings::{
    open_store, Config, FileSettingsStore, SettingsController, SettingsStore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
