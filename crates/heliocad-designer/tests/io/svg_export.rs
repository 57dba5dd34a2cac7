use heliocad_core::ColorMode;
use heliocad_designer::svg_export::{export_vector, SvgExporter};
use heliocad_designer::{Canvas, Point, Shape, Tool};

fn element_lines(svg: &str) -> Vec<&str> {
    svg.lines()
        .filter(|l| l.starts_with("<line") || l.starts_with("<rect") || l.starts_with("<circle"))
        .collect()
}

#[test]
fn test_one_element_per_shape_in_document_order() {
    let shapes = vec![
        Shape::new(Tool::Circle, Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
        Shape::new(Tool::Line, Point::new(0.0, 0.0), Point::new(40.0, 20.0)),
        Shape::new(Tool::Rectangle, Point::new(50.0, 30.0), Point::new(10.0, 10.0)),
    ];
    let svg = SvgExporter::new("black").export(&shapes);
    let elements = element_lines(&svg);

    assert_eq!(
        elements,
        vec![
            r#"<circle cx="0" cy="0" fill="none" r="5" stroke="black" />"#,
            r#"<line stroke="black" x1="0" x2="40" y1="0" y2="20" />"#,
            r#"<rect fill="none" height="20" stroke="black" width="40" x="10" y="10" />"#,
        ]
    );
}

#[test]
fn test_document_is_well_formed() {
    let svg = SvgExporter::new("black").export(&[]);
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(element_lines(&svg).is_empty());
}

#[test]
fn test_stroke_follows_color_mode() {
    assert_eq!(SvgExporter::for_color_mode(ColorMode::Light).stroke(), "black");
    assert_eq!(SvgExporter::for_color_mode(ColorMode::Dark).stroke(), "white");

    let shapes = vec![Shape::new(Tool::Line, Point::new(0.0, 0.0), Point::new(20.0, 0.0))];
    let svg = String::from_utf8(export_vector(&shapes, "white")).unwrap();
    assert!(svg.contains(r#"stroke="white""#));
    assert!(!svg.contains("black"));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.svg");

    let mut canvas = Canvas::new();
    canvas.begin_shape(Tool::Rectangle, Point::new(0.0, 0.0));
    canvas.commit_shape(Point::new(40.0, 40.0));
    canvas.export_svg(&path, ColorMode::Dark).expect("export failed");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        element_lines(&written),
        vec![r#"<rect fill="none" height="40" stroke="white" width="40" x="0" y="0" />"#]
    );
}
