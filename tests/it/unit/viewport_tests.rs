//! Viewport transform tests - zoom clamping, wheel steps, coordinate mapping.

use moodart::Viewport;
use moodart::constants::{MAX_ZOOM, MIN_ZOOM};

#[test]
fn test_zoom_clamps_to_bounds() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(10.0);
    assert_eq!(viewport.zoom(), MAX_ZOOM);
    viewport.set_zoom(0.0);
    assert_eq!(viewport.zoom(), MIN_ZOOM);
    viewport.set_zoom(-3.0);
    assert_eq!(viewport.zoom(), MIN_ZOOM);
}

#[test]
fn test_zoom_steps_stay_on_grid() {
    let mut viewport = Viewport::new();
    for _ in 0..5 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom(), 1.5);
    for _ in 0..3 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), 1.2);
}

#[test]
fn test_zoom_in_at_max_is_noop() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(MAX_ZOOM);
    assert!(!viewport.zoom_in());
    assert_eq!(viewport.zoom(), MAX_ZOOM);
}

#[test]
fn test_wheel_direction_and_step() {
    let mut viewport = Viewport::new();
    assert!(viewport.apply_wheel(-120.0));
    assert_eq!(viewport.zoom(), 1.05);
    assert!(viewport.apply_wheel(3.0));
    assert!(viewport.apply_wheel(500.0));
    assert_eq!(viewport.zoom(), 0.95);
}

#[test]
fn test_wheel_zero_delta_is_noop() {
    let mut viewport = Viewport::new();
    assert!(!viewport.apply_wheel(0.0));
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_non_finite_input_is_ignored() {
    let mut viewport = Viewport::new();
    assert!(!viewport.set_zoom(f32::NAN));
    assert!(!viewport.set_pan((f32::INFINITY, 0.0)));
    assert_eq!(viewport, Viewport::default());
}

#[test]
fn test_screen_board_mapping() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(2.0);
    viewport.set_pan((10.0, -20.0));
    let anchor = (400.0, 300.0);

    let screen = viewport.board_to_screen((50.0, 25.0), anchor);
    assert_eq!(screen, (510.0, 330.0));
    assert_eq!(viewport.screen_to_board(screen, anchor), (50.0, 25.0));
}

#[test]
fn test_pan_is_not_scaled() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(3.0);
    viewport.set_pan((30.0, 0.0));
    // A board point at the origin moves exactly by the pan in screen space
    assert_eq!(viewport.board_to_screen((0.0, 0.0), (0.0, 0.0)), (30.0, 0.0));
}

#[test]
fn test_reset() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(2.5);
    viewport.set_pan((100.0, 100.0));
    viewport.reset();
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(viewport.pan(), (0.0, 0.0));
}

#[test]
fn test_dot_spacing_floor() {
    let mut viewport = Viewport::new();
    assert_eq!(viewport.dot_spacing(), 24.0);
    viewport.set_zoom(0.5);
    assert_eq!(viewport.dot_spacing(), 16.0);
    viewport.set_zoom(2.0);
    assert_eq!(viewport.dot_spacing(), 48.0);
}
