//! End-to-end crop sessions driven the way an interaction adapter drives them.
//!
//! Each test replays a short gesture sequence against a [`FrameCropper`] and
//! checks the geometry a renderer would read back.

use zencrop::press::MultiPress;
use zencrop::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 400×300 4:3 frame at (100, 100) over 1600×1200 content at coverage.
fn standard() -> FrameCropper {
    let frame = Size::new(400.0, 300.0);
    let content = Size::new(1600.0, 1200.0);
    let scale = coverage_scale(content, frame).unwrap();
    FrameCropper::from_state(
        CropConfig::default(),
        FrameConfig {
            frame,
            position: Point::new(100.0, 100.0),
            aspect_ratio: AspectRatio::Standard4x3,
            content,
            content_offset: centered_offset(content, frame, scale),
            content_scale: scale,
        },
    )
    .unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

// ---- Scenarios ----

#[test]
fn initialize_in_container() {
    init_logging();
    let mut c = FrameCropper::new();
    c.initialize_frame(Size::new(1600.0, 1200.0), Size::new(1000.0, 800.0))
        .unwrap();
    let fc = c.config();
    assert_eq!(fc.frame, Size::new(800.0, 600.0));
    assert_eq!(fc.position, Point::new(100.0, 100.0));
    assert_eq!(fc.content_scale, 0.5);
    assert_eq!(fc.content_offset, Point::new(0.0, 0.0));
    assert!(!c.interaction().is_resizing());
    assert!(!c.interaction().is_edit_mode);
}

#[test]
fn aspect_switch_keeps_center() {
    init_logging();
    let mut c = standard();
    assert_eq!(c.config().center(), Point::new(300.0, 250.0));
    c.set_aspect_ratio("1:1".parse().unwrap()).unwrap();
    assert_eq!(c.config().frame, Size::new(400.0, 400.0));
    assert_eq!(c.config().position, Point::new(100.0, 50.0));
    assert_eq!(c.config().center(), Point::new(300.0, 250.0));
}

#[test]
fn every_ratio_switch_keeps_center_and_coverage() {
    init_logging();
    for r in AspectRatio::ALL {
        let mut c = standard();
        c.set_aspect_ratio(r).unwrap();
        let center = c.config().center();
        assert_close(center.x, 300.0);
        assert_close(center.y, 250.0);
        assert_eq!(c.config().frame.width, 400.0);
        assert!(c.config().is_covered(), "{r}");
    }
}

#[test]
fn scale_floor_at_coverage() {
    init_logging();
    let mut c = FrameCropper::new();
    c.initialize_frame(Size::new(1600.0, 1200.0), Size::new(1000.0, 800.0))
        .unwrap();
    c.update_content_scale(0.3).unwrap();
    assert_eq!(c.config().content_scale, 0.5);
}

#[test]
fn bottom_right_resize_is_anchored_top_left() {
    init_logging();
    let mut c = standard();
    c.start_resize(Corner::BottomRight).unwrap();
    c.update_resize(Delta::new(50.0, 30.0)).unwrap();
    c.end_resize();
    assert_eq!(c.config().position, Point::new(100.0, 100.0));
}

#[test]
fn top_left_resize_moves_by_size_change() {
    init_logging();
    let mut c = standard();
    let before = *c.config();
    c.start_resize(Corner::TopLeft).unwrap();
    c.update_resize(Delta::new(50.0, 30.0)).unwrap();
    c.end_resize();
    let after = *c.config();
    let dw = after.frame.width - before.frame.width;
    let dh = after.frame.height - before.frame.height;
    assert_eq!(after.position.x - before.position.x, -dw);
    assert_eq!(after.position.y - before.position.y, -dh);
}

#[test]
fn opposite_corner_stays_put_through_a_gesture() {
    init_logging();
    let moves = [
        Delta::new(12.0, 3.0),
        Delta::new(-40.0, 8.0),
        Delta::new(5.0, -60.0),
        Delta::new(-300.0, -10.0),
        Delta::new(90.0, 90.0),
    ];
    for corner in Corner::ALL {
        let mut c = standard();
        let anchor = c.frame_rect().corner(corner.opposite());
        c.start_resize(corner).unwrap();
        for d in moves {
            c.update_resize(d).unwrap();
            let now = c.frame_rect().corner(corner.opposite());
            assert_close(now.x, anchor.x);
            assert_close(now.y, anchor.y);
            assert!(c.config().is_covered());
        }
        c.end_resize();
    }
}

#[test]
fn minimum_clamp_is_on_ratio() {
    init_logging();
    let mut c = standard();
    c.set_aspect_ratio(AspectRatio::Portrait2x3).unwrap();
    c.start_resize(Corner::BottomLeft).unwrap();
    c.update_resize(Delta::new(1_000.0, 0.0)).unwrap();
    let f = c.config().frame;
    assert_eq!(f.width, 100.0);
    assert_eq!(f.height, 100.0 / AspectRatio::Portrait2x3.ratio());
}

#[test]
fn toggle_twice_is_identity() {
    init_logging();
    let mut c = standard();
    let config = *c.config();
    let mode = c.interaction().is_edit_mode;
    c.toggle_edit_mode().unwrap();
    c.toggle_edit_mode().unwrap();
    assert_eq!(*c.config(), config);
    assert_eq!(c.interaction().is_edit_mode, mode);
}

// ---- Adapter-style flows ----

#[test]
fn double_press_enters_edit_then_pan_then_escape() {
    init_logging();
    let mut c = standard();
    let mut presses = MultiPress::double();

    for at in [1_000, 1_200] {
        if presses.press("frame", at) {
            c.toggle_edit_mode().unwrap();
        }
    }
    assert!(c.interaction().is_edit_mode);
    assert_eq!(c.handle_at(Point::new(100.0, 100.0), 10.0), None);

    // Zoom in so there is room to pan, then drag.
    c.update_content_scale(0.5).unwrap();
    let start = c.config().content_offset;
    c.start_pan().unwrap();
    c.update_pan(Delta::new(-30.0, 0.0)).unwrap();
    c.update_pan(Delta::new(-60.0, -20.0)).unwrap();
    c.end_pan();
    assert_eq!(
        c.config().content_offset,
        Point::new(start.x - 60.0, start.y - 20.0)
    );

    // Escape.
    let frame = c.config().frame;
    c.exit_edit_mode().unwrap();
    assert!(!c.interaction().is_edit_mode);
    assert_eq!(c.config().frame, frame);
}

#[test]
fn click_outside_exits_edit_mode() {
    init_logging();
    let mut c = standard();
    c.enter_edit_mode().unwrap();
    let click = Point::new(20.0, 20.0);
    if !c.contains(click) {
        c.exit_edit_mode().unwrap();
    }
    assert!(!c.interaction().is_edit_mode);
}

#[test]
fn out_of_order_events_leave_state_alone() {
    init_logging();
    let mut c = standard();
    let before = c.clone();

    assert_eq!(
        c.update_resize(Delta::new(10.0, 10.0)),
        Err(CropError::InvalidGestureState)
    );
    assert_eq!(
        c.update_content_position(Point::new(1.0, 1.0)),
        Err(CropError::InvalidGestureState)
    );
    assert_eq!(c.update_pan(Delta::new(1.0, 1.0)), Err(CropError::InvalidGestureState));
    c.end_resize();
    c.end_pan();
    assert_eq!(c, before);
}

#[test]
fn handle_hit_starts_resize() {
    init_logging();
    let mut c = standard();
    let pointer = Point::new(497.0, 402.0);
    let corner = c.handle_at(pointer, 8.0).expect("bottom-right handle");
    assert_eq!(corner, Corner::BottomRight);
    c.start_resize(corner).unwrap();
    c.update_resize(Delta::new(-100.0, 0.0)).unwrap();
    c.end_resize();
    assert_eq!(c.config().frame, Size::new(300.0, 225.0));
    assert_eq!(c.config().position, Point::new(100.0, 100.0));
}

#[test]
fn cancel_by_reinitializing() {
    init_logging();
    let mut c = standard();
    c.start_resize(Corner::TopRight).unwrap();
    c.update_resize(Delta::new(30.0, -10.0)).unwrap();
    c.initialize_frame(Size::new(1600.0, 1200.0), Size::new(1000.0, 800.0))
        .unwrap();
    assert!(!c.interaction().is_resizing());
    assert_eq!(c.config().frame, Size::new(800.0, 600.0));
}

#[test]
fn reset_is_deterministic() {
    init_logging();
    let mut a = standard();
    let mut b = FrameCropper::new();
    a.start_resize(Corner::TopLeft).unwrap();
    a.reset_frame();
    b.reset_frame();
    assert_eq!(a, b);
    assert_eq!(a.config().frame, Size::new(400.0, 300.0));
}

#[test]
fn persisted_record_restores_session() {
    init_logging();
    let mut c = standard();
    c.set_aspect_ratio(AspectRatio::Widescreen16x9).unwrap();
    c.enter_edit_mode().unwrap();
    c.update_content_scale(0.4).unwrap();
    c.update_content_position(Point::new(-120.0, -40.0)).unwrap();

    let record = c.record();
    let restored =
        FrameConfig::from_record(&record, c.config().content, c.config().position).unwrap();
    assert_eq!(restored, *c.config());
}

#[test]
fn persisted_record_keeps_height_driven_frame() {
    init_logging();
    let mut c = FrameCropper::new();
    c.initialize_frame(Size::new(1600.0, 1200.0), Size::new(1000.0, 800.0))
        .unwrap();
    c.set_aspect_ratio(AspectRatio::Widescreen16x9).unwrap();
    for dy in [1.74, 0.3, 7.13, 12.9, 0.01] {
        c.start_resize(Corner::BottomRight).unwrap();
        c.update_resize(Delta::new(0.0, dy)).unwrap();
        c.end_resize();

        let fc = *c.config();
        let restored = FrameConfig::from_record(&c.record(), fc.content, fc.position).unwrap();
        assert_eq!(restored.frame, fc.frame);
        assert_eq!(restored, fc);
    }
}

#[test]
fn empty_image_cannot_start_a_session() {
    init_logging();
    let mut c = FrameCropper::new();
    assert_eq!(
        c.initialize_frame(Size::new(0.0, 0.0), Size::new(1000.0, 800.0)),
        Err(CropError::DegenerateDimensions)
    );
    assert_eq!(c, FrameCropper::new());
}
