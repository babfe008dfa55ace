//! Assertion utilities for robot testing

use crate::robot::{ClickCounter, ToolbarRobot};
use gatebar_ui_graphics::Rect;

/// Assert that a value is within an expected range.
///
/// Useful for fuzzy matching of positions and sizes that might vary slightly
/// with density rounding.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle contains a point.
pub fn assert_rect_contains_point(rect: Rect, x: f32, y: f32, msg: &str) {
    assert!(
        rect.contains(x, y),
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        x,
        y,
        rect
    );
}

/// Assert that the toolbar under test is holding a press.
pub fn assert_pressed(robot: &ToolbarRobot, msg: &str) {
    assert!(
        robot.toolbar().toolbar().is_pressed(),
        "{}: expected an active press, found none",
        msg
    );
}

/// Assert that the toolbar under test is not holding a press.
pub fn assert_not_pressed(robot: &ToolbarRobot, msg: &str) {
    assert!(
        !robot.toolbar().toolbar().is_pressed(),
        "{}: unexpected active press: {:?}",
        msg,
        robot.toolbar().pressed_region()
    );
}

/// Assert an exact click count on a probe.
pub fn assert_clicks(counter: &ClickCounter, expected: u32, msg: &str) {
    assert_eq!(
        counter.count(),
        expected,
        "{}: expected {} clicks, got {}",
        msg,
        expected,
        counter.count()
    );
}
