//! # HelioCAD Core
//!
//! Core types shared by every HelioCAD crate: the error taxonomy, the color
//! theme, and the single-threaded sharing aliases used to hand the canvas to
//! plugins.

pub mod error;
pub mod theme;
pub mod types;

pub use error::{CodecError, Error, PluginError, Result};
pub use theme::{ColorMode, Palette, Rgb};
pub use types::{shared, Shared};
