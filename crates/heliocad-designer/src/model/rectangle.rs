use super::{DesignerShape, Point, Primitive, RenderMode};

/// Axis-aligned rectangle spanned by two opposite corners, in either order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignRectangle {
    pub start: Point,
    pub end: Point,
}

impl DesignRectangle {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// `(x, y, width, height)` with the origin at the top-left corner.
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        (x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs())
    }
}

impl DesignerShape for DesignRectangle {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn render(&self, _mode: RenderMode) -> Primitive {
        let (x, y, width, height) = self.rect();
        Primitive::Rect {
            origin: Point::new(x, y),
            width,
            height,
        }
    }
}
