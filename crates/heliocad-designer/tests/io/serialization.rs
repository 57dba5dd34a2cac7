use heliocad_core::{CodecError, Error};
use heliocad_designer::serialization::{deserialize, from_json, serialize, to_json, ShapeRecord};
use heliocad_designer::{Canvas, Point, Shape, Tool};
use proptest::prelude::*;

fn sample_document() -> Vec<Shape> {
    vec![
        Shape::new(Tool::Line, Point::new(0.0, 0.0), Point::new(40.0, 20.0)),
        Shape::new(Tool::Rectangle, Point::new(60.0, 80.0), Point::new(20.0, 40.0)),
        Shape::new(Tool::Circle, Point::new(100.0, 100.0), Point::new(140.0, 60.0)),
    ]
}

fn drawn_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.replace_shapes(sample_document());
    canvas
}

#[test]
fn test_records_use_native_layout() {
    let records = serialize(&sample_document());
    assert_eq!(
        records[1],
        ShapeRecord {
            tool: "rectangle".to_string(),
            start: vec![60.0, 80.0],
            end: vec![20.0, 40.0],
        }
    );

    let json = to_json(&sample_document()[..1]).unwrap();
    assert_eq!(json, r#"[{"tool":"line","start":[0.0,0.0],"end":[40.0,20.0]}]"#);
}

#[test]
fn test_round_trip_preserves_document() {
    let document = sample_document();
    assert_eq!(deserialize(&serialize(&document)).unwrap(), document);
    assert_eq!(from_json(&to_json(&document).unwrap()).unwrap(), document);
}

#[test]
fn test_non_finite_shape_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.hcad");
    let mut canvas = drawn_canvas();
    let mut shapes = sample_document();
    shapes.push(Shape::new(Tool::Line, Point::new(f64::NAN, 0.0), Point::new(20.0, 0.0)));
    canvas.replace_shapes(shapes);

    assert!(matches!(
        to_json(canvas.shapes()),
        Err(CodecError::MalformedRecord { index: 3, .. })
    ));
    let err = canvas.save_hcad(&path).unwrap_err();
    assert!(err.is_codec_error());
    assert!(!path.exists());
}

#[test]
fn test_accepts_integer_coordinates() {
    let shapes = from_json(r#"[{"tool": "circle", "start": [0, 0], "end": [3, 4]}]"#).unwrap();
    assert_eq!(
        shapes,
        vec![Shape::new(Tool::Circle, Point::new(0.0, 0.0), Point::new(3.0, 4.0))]
    );
}

#[test]
fn test_empty_array_is_empty_document() {
    assert!(from_json("[]").unwrap().is_empty());
}

#[test]
fn test_missing_end_is_malformed() {
    let err = from_json(
        r#"[{"tool": "line", "start": [0, 0], "end": [20, 0]},
            {"tool": "line", "start": [0, 0]}]"#,
    )
    .unwrap_err();
    match err {
        CodecError::MalformedRecord { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("end"), "reason was {reason}");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn test_wrong_coordinate_count_is_malformed() {
    let err = from_json(r#"[{"tool": "line", "start": [0, 0, 0], "end": [20, 0]}]"#).unwrap_err();
    assert!(matches!(err, CodecError::MalformedRecord { index: 0, .. }));

    let records = vec![ShapeRecord {
        tool: "circle".into(),
        start: vec![0.0, 0.0],
        end: vec![5.0],
    }];
    assert!(matches!(
        deserialize(&records),
        Err(CodecError::MalformedRecord { index: 0, .. })
    ));
}

#[test]
fn test_unknown_tool_is_malformed() {
    let err = from_json(r#"[{"tool": "spline", "start": [0, 0], "end": [20, 0]}]"#).unwrap_err();
    assert!(matches!(err, CodecError::MalformedRecord { .. }));
}

#[test]
fn test_non_array_payload_is_invalid_document() {
    assert!(matches!(
        from_json(r#"{"tool": "line"}"#),
        Err(CodecError::InvalidDocument { .. })
    ));
    assert!(matches!(
        from_json("not json"),
        Err(CodecError::InvalidDocument { .. })
    ));
}

#[test]
fn test_failed_load_keeps_existing_document() {
    let mut canvas = drawn_canvas();
    let records = vec![ShapeRecord {
        tool: "line".into(),
        start: vec![0.0, 0.0],
        end: vec![],
    }];

    assert!(canvas.load_records(&records).is_err());
    assert_eq!(canvas.shapes(), sample_document().as_slice());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.hcad");

    drawn_canvas().save_hcad(&path).expect("save failed");

    let mut loaded = Canvas::new();
    loaded.load_hcad(&path).expect("load failed");
    assert_eq!(loaded.shapes(), sample_document().as_slice());
}

#[test]
fn test_load_malformed_file_leaves_canvas_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.hcad");
    std::fs::write(&path, r#"[{"tool": "rectangle", "start": [0, 0]}]"#).unwrap();

    let mut canvas = drawn_canvas();
    let err = canvas.load_hcad(&path).unwrap_err();

    assert!(matches!(err, Error::Codec(CodecError::MalformedRecord { .. })));
    assert_eq!(canvas.shape_count(), 3);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = Canvas::new();
    let err = canvas.load_hcad(dir.path().join("absent.hcad")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    let coord = -500i32..500;
    (
        prop_oneof![Just(Tool::Line), Just(Tool::Rectangle), Just(Tool::Circle)],
        coord.clone(),
        coord.clone(),
        coord.clone(),
        coord,
    )
        .prop_map(|(tool, x1, y1, x2, y2)| {
            Shape::new(
                tool,
                Point::new(f64::from(x1) * 20.0, f64::from(y1) * 20.0),
                Point::new(f64::from(x2) * 20.0, f64::from(y2) * 20.0),
            )
        })
}

proptest! {
    #[test]
    fn json_round_trip_is_lossless(document in prop::collection::vec(arb_shape(), 0..16)) {
        let json = to_json(&document).unwrap();
        prop_assert_eq!(from_json(&json).unwrap(), document);
    }
}
