//! Color modes and the palette each one implies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Theme selection persisted as `color_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Dark strokes on a white canvas
    #[default]
    Light,
    /// Light strokes on a dark canvas
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                pen: Rgb::new(0, 0, 0),
                grid: Rgb::new(220, 220, 220),
                svg_stroke: "black",
            },
            Self::Dark => Palette {
                pen: Rgb::new(255, 255, 255),
                grid: Rgb::new(60, 60, 60),
                svg_stroke: "white",
            },
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown color mode '{}'", other)),
        }
    }
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors used to paint the canvas and to stroke exported shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Shape stroke on screen (2px pen)
    pub pen: Rgb,
    /// Grid lines (1px)
    pub grid: Rgb,
    /// Named SVG stroke color for export
    pub svg_stroke: &'static str,
}
