use dragdraw_canvas::{BoxCanvas, CanvasSnapshot};
use dragdraw_core::transform::to_canonical;
use dragdraw_core::{Point, ScreenRotation, TouchEvent};

use crate::support::TestDisplay;

fn draw_box(canvas: &mut BoxCanvas, origin: Point, current: Point) {
    canvas.handle_touch(&TouchEvent::down(origin));
    canvas.handle_touch(&TouchEvent::moved(current));
    canvas.handle_touch(&TouchEvent::up(current));
}

#[test]
fn test_snapshot_of_empty_canvas() {
    let mut canvas = BoxCanvas::new();
    canvas.attach(&TestDisplay::new(ScreenRotation::Deg0, 1080, 1920));

    let snapshot = canvas.snapshot();
    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.rotation, ScreenRotation::Deg0);

    // Restoring zero boxes is fine.
    let mut restored = BoxCanvas::new();
    restored
        .restore(&snapshot, &TestDisplay::new(ScreenRotation::Deg0, 1080, 1920))
        .unwrap();
    assert_eq!(restored.box_count(), 0);
}

#[test]
fn test_snapshot_points_are_canonical() {
    let display = TestDisplay::new(ScreenRotation::Deg90, 1920, 1080);
    let mut canvas = BoxCanvas::new();
    canvas.attach(&display);
    draw_box(&mut canvas, Point::new(300.0, 400.0), Point::new(500.0, 600.0));

    let snapshot = canvas.snapshot();
    let record = snapshot.records[0];

    let expected_origin = to_canonical(
        Point::new(300.0, 400.0),
        canvas.rotation(),
        canvas.frame(),
    );
    assert_eq!(record.origin, expected_origin);
}

#[test]
fn test_snapshot_includes_box_mid_drag() {
    let mut canvas = BoxCanvas::new();
    canvas.attach(&TestDisplay::new(ScreenRotation::Deg0, 1080, 1920));
    canvas.handle_touch(&TouchEvent::down(Point::new(10.0, 10.0)));
    canvas.handle_touch(&TouchEvent::moved(Point::new(50.0, 50.0)));

    let snapshot = canvas.snapshot();
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(snapshot.records[0].current, Point::new(50.0, 50.0));
}

#[test]
fn test_restore_finalizes_any_live_gesture() {
    let display = TestDisplay::new(ScreenRotation::Deg0, 1080, 1920);
    let mut canvas = BoxCanvas::new();
    canvas.attach(&display);
    canvas.handle_touch(&TouchEvent::down(Point::new(10.0, 10.0)));

    let snapshot = canvas.snapshot();
    canvas.take_redraw_request();
    canvas.restore(&snapshot, &display).unwrap();

    assert!(!canvas.is_drawing());
    assert_eq!(canvas.box_count(), 1);
    assert!(canvas.take_redraw_request());
}

#[test]
fn test_restore_preserves_drawing_order() {
    let display = TestDisplay::new(ScreenRotation::Deg0, 1080, 1920);
    let mut canvas = BoxCanvas::new();
    canvas.attach(&display);
    draw_box(&mut canvas, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
    draw_box(&mut canvas, Point::new(3.0, 3.0), Point::new(4.0, 4.0));
    draw_box(&mut canvas, Point::new(5.0, 5.0), Point::new(6.0, 6.0));

    let snapshot = canvas.snapshot();
    let mut restored = BoxCanvas::new();
    restored.restore(&snapshot, &display).unwrap();

    assert_eq!(restored.box_count(), 3);
    assert_eq!(restored.boxes()[0].origin, Point::new(1.0, 1.0));
    assert_eq!(restored.boxes()[1].origin, Point::new(3.0, 3.0));
    assert_eq!(restored.boxes()[2].origin, Point::new(5.0, 5.0));
}

#[test]
fn test_restore_rejects_unknown_version() {
    let display = TestDisplay::new(ScreenRotation::Deg0, 1080, 1920);
    let mut canvas = BoxCanvas::new();
    canvas.attach(&display);

    let mut snapshot = canvas.snapshot();
    snapshot.version = "99.0".to_string();

    assert!(canvas.restore(&snapshot, &display).is_err());
}

#[test]
fn test_snapshot_json_roundtrip() {
    let display = TestDisplay::new(ScreenRotation::Deg180, 1080, 1920);
    let mut canvas = BoxCanvas::new();
    canvas.attach(&display);
    draw_box(&mut canvas, Point::new(100.0, 200.0), Point::new(300.0, 400.0));

    let snapshot = canvas.snapshot();
    let json = snapshot.to_json().unwrap();
    let decoded = CanvasSnapshot::from_json(&json).unwrap();

    assert_eq!(decoded.version, snapshot.version);
    assert_eq!(decoded.rotation, snapshot.rotation);
    assert_eq!(decoded.records.len(), 1);
    assert_eq!(decoded.records[0].origin, snapshot.records[0].origin);
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(CanvasSnapshot::from_json("not json at all").is_err());
}
