use heliocad_designer::{Canvas, Grid, Point, GRID_SIZE};
use proptest::prelude::*;

#[test]
fn test_snap_rounds_each_axis_independently() {
    let grid = Grid::default();
    assert_eq!(grid.snap(Point::new(9.9, 10.0)), Point::new(0.0, 20.0));
    assert_eq!(grid.snap(Point::new(-29.0, 49.0)), Point::new(-20.0, 40.0));
}

#[test]
fn test_default_grid_size() {
    assert_eq!(Grid::default().size(), GRID_SIZE);
    assert_eq!(GRID_SIZE, 20.0);
}

#[test]
fn test_snapped_points_are_aligned() {
    let grid = Grid::default();
    assert!(grid.is_aligned(Point::new(40.0, -60.0)));
    assert!(!grid.is_aligned(Point::new(41.0, -60.0)));
}

#[test]
fn test_snap_just_below_a_half_cell_stays_put() {
    let grid = Grid::new(1.0);
    assert_eq!(grid.snap_value(0.49999999999999994), 0.0);
    assert_eq!(grid.snap_value(2.5), 3.0);
}

#[test]
fn test_grid_lines_with_unbounded_viewport_return_nothing() {
    let canvas = Canvas::new();
    assert!(canvas.grid_lines(f64::NAN, 10.0).is_empty());
    assert!(canvas.grid_lines(f64::INFINITY, 10.0).is_empty());
    assert_eq!(canvas.grid_lines(100.0, 40.0).len(), 5 + 2);
}

proptest! {
    #[test]
    fn snap_is_idempotent(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
        let grid = Grid::default();
        let once = grid.snap(Point::new(x, y));
        prop_assert_eq!(grid.snap(once), once);
    }

    #[test]
    fn snap_moves_at_most_half_a_cell(x in -1.0e4f64..1.0e4, y in -1.0e4f64..1.0e4) {
        let grid = Grid::default();
        let snapped = grid.snap(Point::new(x, y));
        prop_assert!((snapped.x - x).abs() <= GRID_SIZE / 2.0 + 1e-9);
        prop_assert!((snapped.y - y).abs() <= GRID_SIZE / 2.0 + 1e-9);
    }
}
