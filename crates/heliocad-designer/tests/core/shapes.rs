use heliocad_designer::{
    DesignCircle, DesignerShape, Point, Primitive, RenderMode, Shape, Tool,
};

#[test]
fn test_rectangle_geometry_from_corners() {
    let rect = Shape::new(Tool::Rectangle, Point::new(10.0, 10.0), Point::new(50.0, 30.0));
    assert_eq!(
        rect.preview_geometry(),
        Primitive::Rect {
            origin: Point::new(10.0, 10.0),
            width: 40.0,
            height: 20.0
        }
    );
}

#[test]
fn test_rectangle_geometry_with_reversed_corners() {
    let rect = Shape::new(Tool::Rectangle, Point::new(50.0, 30.0), Point::new(10.0, 10.0));
    assert_eq!(
        rect.export_geometry(),
        Primitive::Rect {
            origin: Point::new(10.0, 10.0),
            width: 40.0,
            height: 20.0
        }
    );
}

#[test]
fn test_circle_export_radius_is_euclidean() {
    let circle = Shape::new(Tool::Circle, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(
        circle.export_geometry(),
        Primitive::Circle {
            center: Point::new(0.0, 0.0),
            radius: 5.0
        }
    );
}

#[test]
fn test_circle_preview_radius_is_max_axis() {
    let circle = Shape::new(Tool::Circle, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(
        circle.preview_geometry(),
        Primitive::Circle {
            center: Point::new(0.0, 0.0),
            radius: 4.0
        }
    );
}

#[test]
fn test_circle_radius_helpers() {
    let circle = DesignCircle::new(Point::new(20.0, 20.0), Point::new(-40.0, 100.0));
    assert_eq!(circle.preview_radius(), 80.0);
    assert_eq!(circle.export_radius(), 100.0);
    assert_eq!(circle.radius(RenderMode::Export), 100.0);
}

#[test]
fn test_line_geometry_keeps_endpoints() {
    let line = Shape::new(Tool::Line, Point::new(40.0, 0.0), Point::new(0.0, 20.0));
    assert_eq!(
        line.export_geometry(),
        Primitive::Line {
            from: Point::new(40.0, 0.0),
            to: Point::new(0.0, 20.0)
        }
    );
    assert_eq!(line.bounds(RenderMode::Export), (0.0, 0.0, 40.0, 20.0));
}

#[test]
fn test_circle_bounds_depend_on_mode() {
    let circle = Shape::new(Tool::Circle, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert_eq!(circle.bounds(RenderMode::Preview), (-4.0, -4.0, 4.0, 4.0));
    assert_eq!(circle.bounds(RenderMode::Export), (-5.0, -5.0, 5.0, 5.0));
}

#[test]
fn test_tool_names_round_trip() {
    for tool in Tool::ALL {
        assert_eq!(tool.as_str().parse::<Tool>(), Ok(tool));
    }
    assert!("polygon".parse::<Tool>().is_err());
    assert!("Line".parse::<Tool>().is_err());
    assert_eq!(Tool::Rectangle.label(), "Rectangle");
}
