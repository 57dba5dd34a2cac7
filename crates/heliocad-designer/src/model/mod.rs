use std::str::FromStr;

mod circle;
mod line;
mod rectangle;

pub use circle::DesignCircle;
pub use line::DesignLine;
pub use rectangle::DesignRectangle;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Largest single-axis offset to `other`.
    pub fn max_axis_distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Which radius measure a circle is drawn with.
///
/// The live preview and the exported/persisted geometry disagree for circles:
/// the preview uses the largest axis offset, export uses the true distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    Export,
}

/// Concrete primitive a shape resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point },
    Rect { origin: Point, width: f64, height: f64 },
    Circle { center: Point, radius: f64 },
}

pub trait DesignerShape {
    fn start(&self) -> Point;
    fn end(&self) -> Point;
    fn render(&self, mode: RenderMode) -> Primitive;

    /// Axis-aligned `(min_x, min_y, max_x, max_y)` of the rendered primitive.
    fn bounds(&self, mode: RenderMode) -> (f64, f64, f64, f64) {
        match self.render(mode) {
            Primitive::Line { from, to } => (
                from.x.min(to.x),
                from.y.min(to.y),
                from.x.max(to.x),
                from.y.max(to.y),
            ),
            Primitive::Rect {
                origin,
                width,
                height,
            } => (origin.x, origin.y, origin.x + width, origin.y + height),
            Primitive::Circle { center, radius } => (
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }
}

/// Drawing tools, which double as the persisted shape tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Line,
    Rectangle,
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Line, Tool::Rectangle, Tool::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
        }
    }

    /// Toolbar caption.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Tool::Line),
            "rectangle" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            other => Err(format!("unknown tool '{}'", other)),
        }
    }
}

/// One committed shape. Every variant is defined by the two points of the
/// drag that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line(DesignLine),
    Rectangle(DesignRectangle),
    Circle(DesignCircle),
}

impl Shape {
    pub fn new(tool: Tool, start: Point, end: Point) -> Self {
        match tool {
            Tool::Line => Shape::Line(DesignLine::new(start, end)),
            Tool::Rectangle => Shape::Rectangle(DesignRectangle::new(start, end)),
            Tool::Circle => Shape::Circle(DesignCircle::new(start, end)),
        }
    }

    pub fn tool(&self) -> Tool {
        match self {
            Shape::Line(_) => Tool::Line,
            Shape::Rectangle(_) => Tool::Rectangle,
            Shape::Circle(_) => Tool::Circle,
        }
    }

    /// Geometry as drawn on screen.
    pub fn preview_geometry(&self) -> Primitive {
        self.render(RenderMode::Preview)
    }

    /// Geometry as written to SVG.
    pub fn export_geometry(&self) -> Primitive {
        self.render(RenderMode::Export)
    }
}

impl DesignerShape for Shape {
    fn start(&self) -> Point {
        match self {
            Shape::Line(s) => s.start(),
            Shape::Rectangle(s) => s.start(),
            Shape::Circle(s) => s.start(),
        }
    }

    fn end(&self) -> Point {
        match self {
            Shape::Line(s) => s.end(),
            Shape::Rectangle(s) => s.end(),
            Shape::Circle(s) => s.end(),
        }
    }

    fn render(&self, mode: RenderMode) -> Primitive {
        match self {
            Shape::Line(s) => s.render(mode),
            Shape::Rectangle(s) => s.render(mode),
            Shape::Circle(s) => s.render(mode),
        }
    }
}
