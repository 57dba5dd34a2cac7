//! Canvas holding the committed document and the in-progress drag.

use heliocad_core::{ColorMode, Palette};
use tracing::debug;

use crate::grid::Grid;
use crate::model::{Point, Shape, Tool};

/// Ordered committed shapes: draw order, file order and export order.
pub type Document = Vec<Shape>;

/// Pointer-drag state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawState {
    Idle,
    Drawing {
        tool: Tool,
        start: Point,
        /// Last snapped pointer position, once the pointer has moved.
        end: Option<Point>,
    },
}

#[derive(Debug, Clone)]
pub struct Canvas {
    shapes: Document,
    grid: Grid,
    tool: Tool,
    state: DrawState,
    color_mode: ColorMode,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_grid(Grid::default())
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            shapes: Vec::new(),
            grid,
            tool: Tool::default(),
            state: DrawState::Idle,
            color_mode: ColorMode::default(),
        }
    }

    pub fn with_grid_size(size: f64) -> Self {
        Self::with_grid(Grid::new(size))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snap(&self, point: Point) -> Point {
        self.grid.snap(point)
    }

    pub fn grid_lines(&self, width: f64, height: f64) -> Vec<(Point, Point)> {
        self.grid.lines(width, height)
    }

    /// Active tool used by [`Canvas::press`].
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    /// Pen and grid colors for painting in the current color mode.
    pub fn palette(&self) -> Palette {
        self.color_mode.palette()
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    /// Starts a drag at the snapped `point`. A drag already in progress is
    /// discarded.
    pub fn begin_shape(&mut self, tool: Tool, point: Point) {
        self.state = DrawState::Drawing {
            tool,
            start: self.grid.snap(point),
            end: None,
        };
    }

    /// Starts a drag with the active tool.
    pub fn press(&mut self, point: Point) {
        self.begin_shape(self.tool, point);
    }

    /// Moves the live end point. Returns `false` (and does nothing) when no
    /// drag is in progress.
    pub fn update_preview(&mut self, point: Point) -> bool {
        let snapped = self.grid.snap(point);
        match &mut self.state {
            DrawState::Drawing { end, .. } => {
                *end = Some(snapped);
                true
            }
            DrawState::Idle => false,
        }
    }

    /// Finishes the drag at the snapped `point` and appends the shape.
    /// Returns `None` when no drag is in progress.
    pub fn commit_shape(&mut self, point: Point) -> Option<Shape> {
        let DrawState::Drawing { tool, start, .. } = self.state else {
            return None;
        };
        let shape = Shape::new(tool, start, self.grid.snap(point));
        self.shapes.push(shape);
        self.state = DrawState::Idle;
        debug!(tool = %tool, count = self.shapes.len(), "shape committed");
        Some(shape)
    }

    /// Drops an in-progress drag without committing it.
    pub fn cancel_shape(&mut self) {
        self.state = DrawState::Idle;
    }

    /// The shape being dragged, once the pointer has moved.
    pub fn preview(&self) -> Option<Shape> {
        match self.state {
            DrawState::Drawing {
                tool,
                start,
                end: Some(end),
            } => Some(Shape::new(tool, start, end)),
            _ => None,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Replaces the whole document.
    pub fn replace_shapes(&mut self, shapes: Document) {
        self.shapes = shapes;
    }
}
