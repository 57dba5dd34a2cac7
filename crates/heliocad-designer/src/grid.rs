//! Snapping grid.

use crate::model::Point;

/// Default spacing between grid lines, in canvas units.
pub const GRID_SIZE: f64 = 20.0;

/// Upper bound on grid lines per direction.
pub const MAX_GRID_LINES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    size: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

impl Grid {
    /// Creates a grid with the given spacing. Non-positive or non-finite
    /// spacing falls back to [`GRID_SIZE`].
    pub fn new(size: f64) -> Self {
        if size.is_finite() && size > 0.0 {
            Self { size }
        } else {
            Self::default()
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Rounds one coordinate to the nearest grid multiple. Ties go to the
    /// larger multiple.
    pub fn snap_value(&self, value: f64) -> f64 {
        let cells = value / self.size;
        let below = cells.floor();
        // `cells - below` is exact, unlike `cells + 0.5`.
        let nearest = if cells - below >= 0.5 { below + 1.0 } else { below };
        nearest * self.size
    }

    pub fn snap(&self, point: Point) -> Point {
        Point::new(self.snap_value(point.x), self.snap_value(point.y))
    }

    pub fn is_aligned(&self, point: Point) -> bool {
        self.snap(point) == point
    }

    /// Grid segments covering a `width` x `height` viewport: vertical lines
    /// first, then horizontal ones, each starting at 0. A viewport that is
    /// empty or not finite has no lines; each direction is capped at
    /// [`MAX_GRID_LINES`].
    pub fn lines(&self, width: f64, height: f64) -> Vec<(Point, Point)> {
        let mut lines = Vec::new();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return lines;
        }
        for x in self.steps(width) {
            lines.push((Point::new(x, 0.0), Point::new(x, height)));
        }
        for y in self.steps(height) {
            lines.push((Point::new(0.0, y), Point::new(width, y)));
        }
        lines
    }

    fn steps(&self, limit: f64) -> impl Iterator<Item = f64> {
        let size = self.size;
        (0..MAX_GRID_LINES)
            .map(move |i| i as f64 * size)
            .take_while(move |&offset| offset < limit)
    }
}
