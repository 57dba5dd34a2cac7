use super::{DesignerShape, Point, Primitive, RenderMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl DesignerShape for DesignLine {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn render(&self, _mode: RenderMode) -> Primitive {
        Primitive::Line {
            from: self.start,
            to: self.end,
        }
    }
}
