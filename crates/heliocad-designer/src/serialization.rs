//! Serialization and deserialization for `.hcad` files.
//!
//! The native format is a JSON array with one object per shape:
//!
//! ```json
//! [{"tool": "rectangle", "start": [20.0, 40.0], "end": [100.0, 80.0]}]
//! ```
//!
//! Loading is all-or-nothing: every record is validated before the canvas
//! document is replaced, so a malformed file never leaves a half-loaded
//! drawing behind.

use heliocad_core::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::canvas::{Canvas, Document};
use crate::model::{DesignerShape, Point, Shape, Tool};

/// Native file extension, without the dot.
pub const HCAD_EXTENSION: &str = "hcad";

/// One persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub tool: String,
    pub start: Vec<f64>,
    pub end: Vec<f64>,
}

impl ShapeRecord {
    pub fn from_shape(shape: &Shape) -> Self {
        let start = shape.start();
        let end = shape.end();
        Self {
            tool: shape.tool().as_str().to_string(),
            start: vec![start.x, start.y],
            end: vec![end.x, end.y],
        }
    }

    /// Validates the record and builds the shape it describes.
    pub fn to_shape(&self, index: usize) -> std::result::Result<Shape, CodecError> {
        let tool: Tool = self
            .tool
            .parse()
            .map_err(|e: String| CodecError::malformed(index, e))?;
        let start = point_from(&self.start, "start", index)?;
        let end = point_from(&self.end, "end", index)?;
        Ok(Shape::new(tool, start, end))
    }
}

fn point_from(coords: &[f64], field: &str, index: usize) -> std::result::Result<Point, CodecError> {
    match coords {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => Err(CodecError::malformed(
            index,
            format!("`{}` must hold 2 coordinates, found {}", field, coords.len()),
        )),
    }
}

/// Converts a document to its ordered record list.
pub fn serialize(shapes: &[Shape]) -> Vec<ShapeRecord> {
    shapes.iter().map(ShapeRecord::from_shape).collect()
}

/// Converts records back into a document, failing on the first bad record.
pub fn deserialize(records: &[ShapeRecord]) -> std::result::Result<Document, CodecError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_shape(index))
        .collect()
}

/// Encodes a document as a `.hcad` payload. Shapes with non-finite
/// coordinates are rejected, since JSON would write them as `null`.
pub fn to_json(shapes: &[Shape]) -> std::result::Result<String, CodecError> {
    if let Some(index) = shapes
        .iter()
        .position(|shape| !(shape.start().is_finite() && shape.end().is_finite()))
    {
        return Err(CodecError::malformed(index, "coordinates must be finite"));
    }
    serde_json::to_string(&serialize(shapes)).map_err(CodecError::from)
}

/// Parses a `.hcad` payload.
///
/// Each array element is decoded on its own so that a missing or mistyped
/// field is reported as a malformed record with its index.
pub fn from_json(content: &str) -> std::result::Result<Document, CodecError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)?;
    let records = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<ShapeRecord>(value)
                .map_err(|e| CodecError::malformed(index, e.to_string()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    deserialize(&records)
}

impl Canvas {
    /// Replaces the document with `records`, or leaves it untouched on error.
    pub fn load_records(&mut self, records: &[ShapeRecord]) -> std::result::Result<(), CodecError> {
        let shapes = deserialize(records)?;
        self.replace_shapes(shapes);
        Ok(())
    }

    /// Save the document to a `.hcad` file
    pub fn save_hcad(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = to_json(self.shapes())?;
        std::fs::write(path.as_ref(), json)?;
        info!(path = %path.as_ref().display(), shapes = self.shape_count(), "saved drawing");
        Ok(())
    }

    /// Load a `.hcad` file, replacing the document
    pub fn load_hcad(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let shapes = from_json(&content)?;
        self.replace_shapes(shapes);
        info!(path = %path.as_ref().display(), shapes = self.shape_count(), "loaded drawing");
        Ok(())
    }
}
