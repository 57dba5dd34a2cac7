use super::{DesignerShape, Point, Primitive, RenderMode};

/// Circle centered on the drag start; the drag end sets the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignCircle {
    pub center: Point,
    pub rim: Point,
}

impl DesignCircle {
    pub fn new(center: Point, rim: Point) -> Self {
        Self { center, rim }
    }

    /// Radius used while dragging: the larger of the two axis offsets.
    pub fn preview_radius(&self) -> f64 {
        self.center.max_axis_distance_to(&self.rim)
    }

    /// Radius written on export: Euclidean distance.
    pub fn export_radius(&self) -> f64 {
        self.center.distance_to(&self.rim)
    }

    pub fn radius(&self, mode: RenderMode) -> f64 {
        match mode {
            RenderMode::Preview => self.preview_radius(),
            RenderMode::Export => self.export_radius(),
        }
    }
}

impl DesignerShape for DesignCircle {
    fn start(&self) -> Point {
        self.center
    }

    fn end(&self) -> Point {
        self.rim
    }

    fn render(&self, mode: RenderMode) -> Primitive {
        Primitive::Circle {
            center: self.center,
            radius: self.radius(mode),
        }
    }
}
