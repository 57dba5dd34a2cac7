//! SVG export.
//!
//! Produces an SVG 1.2 Tiny document with one element per shape, in document
//! order. Strokes use a single named color and nothing is filled. Circles are
//! written with their export radius (Euclidean), not the preview radius.

use heliocad_core::{ColorMode, Result};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use crate::canvas::Canvas;
use crate::model::{Primitive, Shape};

pub const SVG_EXTENSION: &str = "svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgExporter {
    stroke: String,
}

impl SvgExporter {
    pub fn new(stroke: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
        }
    }

    /// Exporter stroking with the theme's color: black for light, white for dark.
    pub fn for_color_mode(mode: ColorMode) -> Self {
        Self::new(mode.palette().svg_stroke)
    }

    pub fn stroke(&self) -> &str {
        &self.stroke
    }

    pub fn export(&self, shapes: &[Shape]) -> String {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        svg.push_str(
            r#"<svg baseProfile="tiny" height="100%" version="1.2" width="100%" xmlns="http://www.w3.org/2000/svg">"#,
        );
        svg.push('\n');
        for shape in shapes {
            self.write_element(&mut svg, shape.export_geometry());
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn write_element(&self, svg: &mut String, primitive: Primitive) {
        let stroke = &self.stroke;
        // Writing into a String cannot fail.
        let _ = match primitive {
            Primitive::Line { from, to } => write!(
                svg,
                r#"<line stroke="{}" x1="{}" x2="{}" y1="{}" y2="{}" />"#,
                stroke, from.x, to.x, from.y, to.y
            ),
            Primitive::Rect {
                origin,
                width,
                height,
            } => write!(
                svg,
                r#"<rect fill="none" height="{}" stroke="{}" width="{}" x="{}" y="{}" />"#,
                height, stroke, width, origin.x, origin.y
            ),
            Primitive::Circle { center, radius } => write!(
                svg,
                r#"<circle cx="{}" cy="{}" fill="none" r="{}" stroke="{}" />"#,
                center.x, center.y, radius, stroke
            ),
        };
    }

    pub fn export_to_file(&self, shapes: &[Shape], path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.export(shapes))?;
        info!(path = %path.as_ref().display(), shapes = shapes.len(), stroke = %self.stroke, "exported SVG");
        Ok(())
    }
}

/// Renders `shapes` as SVG bytes stroked with `stroke`.
pub fn export_vector(shapes: &[Shape], stroke: &str) -> Vec<u8> {
    SvgExporter::new(stroke).export(shapes).into_bytes()
}

impl Canvas {
    /// Exports the document stroked for `mode`.
    pub fn export_svg(&self, path: impl AsRef<Path>, mode: ColorMode) -> Result<()> {
        SvgExporter::for_color_mode(mode).export_to_file(self.shapes(), path)
    }
}
