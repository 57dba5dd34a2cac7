use heliocad_designer::canvas::{Canvas, DrawState};
use heliocad_designer::{DesignerShape, Point, Shape, Tool};

#[test]
fn test_drag_commits_snapped_shape() {
    let mut canvas = Canvas::new();
    canvas.begin_shape(Tool::Line, Point::new(12.0, 9.0));
    assert!(canvas.is_drawing());

    let shape = canvas.commit_shape(Point::new(51.0, 29.0)).expect("drag in progress");

    assert_eq!(shape.start(), Point::new(20.0, 0.0));
    assert_eq!(shape.end(), Point::new(60.0, 20.0));
    assert_eq!(canvas.shapes(), &[shape]);
    assert_eq!(canvas.state(), DrawState::Idle);
}

#[test]
fn test_palette_follows_color_mode() {
    let mut canvas = Canvas::new();
    assert_eq!(canvas.palette().pen.to_hex(), "#000000");
    canvas.set_color_mode(heliocad_core::ColorMode::Dark);
    assert_eq!(canvas.palette().pen.to_hex(), "#ffffff");
    assert_eq!(canvas.palette().grid.to_hex(), "#3c3c3c");
}

#[test]
fn test_preview_tracks_pointer_until_commit() {
    let mut canvas = Canvas::new();
    canvas.begin_shape(Tool::Rectangle, Point::new(0.0, 0.0));
    assert!(canvas.preview().is_none());

    assert!(canvas.update_preview(Point::new(33.0, 18.0)));
    let preview = canvas.preview().expect("preview after move");
    assert_eq!(preview.end(), Point::new(40.0, 20.0));
    assert_eq!(canvas.shape_count(), 0);

    canvas.commit_shape(Point::new(41.0, 41.0));
    assert!(canvas.preview().is_none());
    assert_eq!(canvas.shape_count(), 1);
}

#[test]
fn test_stray_events_while_idle_are_ignored() {
    let mut canvas = Canvas::new();
    canvas.begin_shape(Tool::Circle, Point::new(0.0, 0.0));
    canvas.commit_shape(Point::new(60.0, 0.0));
    let before = canvas.shapes().to_vec();

    assert!(!canvas.update_preview(Point::new(100.0, 100.0)));
    assert!(canvas.commit_shape(Point::new(100.0, 100.0)).is_none());

    assert_eq!(canvas.shapes(), before.as_slice());
    assert_eq!(canvas.state(), DrawState::Idle);
}

#[test]
fn test_insertion_order_is_kept() {
    let mut canvas = Canvas::new();
    for (tool, x) in [(Tool::Circle, 0.0), (Tool::Line, 40.0), (Tool::Rectangle, 80.0)] {
        canvas.begin_shape(tool, Point::new(x, 0.0));
        canvas.commit_shape(Point::new(x + 20.0, 20.0));
    }

    let tools: Vec<Tool> = canvas.shapes().iter().map(Shape::tool).collect();
    assert_eq!(tools, vec![Tool::Circle, Tool::Line, Tool::Rectangle]);
}

#[test]
fn test_custom_grid_size() {
    let mut canvas = Canvas::with_grid_size(5.0);
    canvas.begin_shape(Tool::Line, Point::new(6.0, 7.6));
    let shape = canvas.commit_shape(Point::new(12.4, 2.5)).unwrap();
    assert_eq!(shape.start(), Point::new(5.0, 10.0));
    assert_eq!(shape.end(), Point::new(10.0, 5.0));
}

#[test]
fn test_replace_shapes_swaps_document() {
    let mut canvas = Canvas::new();
    canvas.begin_shape(Tool::Line, Point::new(0.0, 0.0));
    canvas.commit_shape(Point::new(20.0, 0.0));

    let replacement = vec![Shape::new(
        Tool::Circle,
        Point::new(40.0, 40.0),
        Point::new(60.0, 40.0),
    )];
    canvas.replace_shapes(replacement.clone());
    assert_eq!(canvas.shapes(), replacement.as_slice());
}
