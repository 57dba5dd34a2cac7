//! # HelioCAD Designer
//!
//! The drawing model behind the HelioCAD canvas: shapes, the snapping grid,
//! the pointer-drag state machine, and the two file codecs (native `.hcad`
//! records and SVG export).
//!
//! ## Architecture
//!
//! ```text
//! Canvas (document + drag state)
//!   ├── Grid (snap, grid lines)
//!   └── Shapes (line, rectangle, circle from two points)
//!
//! Codecs
//!   ├── serialization (.hcad JSON records)
//!   └── svg_export (.svg)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use heliocad_designer::{Canvas, Point, Tool};
//!
//! let mut canvas = Canvas::new();
//! canvas.begin_shape(Tool::Rectangle, Point::new(12.0, 9.0));
//! canvas.update_preview(Point::new(47.0, 33.0));
//! canvas.commit_shape(Point::new(51.0, 29.0));
//!
//! assert_eq!(canvas.shape_count(), 1);
//! ```

pub mod canvas;
pub mod grid;
pub mod model;
pub mod serialization;
pub mod svg_export;

pub use canvas::{Canvas, Document, DrawState};
pub use grid::{Grid, GRID_SIZE, MAX_GRID_LINES};
pub use model::{
    DesignCircle, DesignLine, DesignRectangle, DesignerShape, Point, Primitive, RenderMode, Shape,
    Tool,
};
pub use serialization::{deserialize, from_json, serialize, to_json, ShapeRecord, HCAD_EXTENSION};
pub use svg_export::{export_vector, SvgExporter, SVG_EXTENSION};
