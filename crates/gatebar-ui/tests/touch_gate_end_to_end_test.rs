//! End-to-end tests driving a GatedToolbar through the dispatcher the way a
//! window shell would: cursor moves, presses, and releases, with the gate
//! toggled between events.

use gatebar_testing::{
    assert_approx_eq, assert_clicks, assert_not_pressed, assert_pressed,
    assert_rect_contains_point, create_toolbar_robot, ClickCounter,
};
use gatebar_ui_graphics::Rect;

fn robot_with_item() -> (gatebar_testing::ToolbarRobot, ClickCounter, Rect) {
    let mut robot = create_toolbar_robot(360.0, 56.0);
    let counter = ClickCounter::new();
    let id = robot.toolbar_mut().add_action_item("search", counter.handler());
    let bounds = robot.toolbar().item_bounds(id).unwrap();
    (robot, counter, bounds)
}

fn center(rect: Rect) -> (f32, f32) {
    (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

#[test]
fn click_flows_through_with_the_default_gate() {
    let (mut robot, counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);
    assert_approx_eq(bounds.width, 48.0, 0.5, "action item is one item-size square");
    assert_rect_contains_point(bounds, x, y, "click target sits inside the item");

    assert!(robot.toolbar().is_touch_enabled());
    assert!(robot.click_at(x, y));
    assert_clicks(&counter, 1, "default gate forwards the click");
    assert_not_pressed(&robot, "gesture completed");
}

#[test]
fn closed_gate_rejects_the_press() {
    let (mut robot, counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);

    robot.set_touch_enabled(false);
    assert!(!robot.press_at(x, y));
    assert_not_pressed(&robot, "rejected press must not reach the toolbar");
    robot.release();
    assert_clicks(&counter, 0, "no handler fires while gated");
}

#[test]
fn reopening_the_gate_restores_dispatch() {
    let (mut robot, counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);

    robot.set_touch_enabled(false);
    robot.set_touch_enabled(true);

    assert!(robot.click_at(x, y));
    assert_clicks(&counter, 1, "gate re-enabled correctly");
}

#[test]
fn gate_toggles_are_idempotent() {
    let (mut robot, counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);

    robot.set_touch_enabled(false);
    robot.set_touch_enabled(false);
    assert!(!robot.click_at(x, y));
    assert_clicks(&counter, 0, "double-disable behaves like one disable");

    robot.set_touch_enabled(true);
    robot.set_touch_enabled(true);
    assert!(robot.click_at(x, y));
    assert_clicks(&counter, 1, "double-enable behaves like one enable");
}

#[test]
fn moves_continue_a_gesture_but_not_a_gated_one() {
    let (mut robot, _counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);

    assert!(robot.press_at(x, y));
    assert!(robot.move_to(x + 2.0, y));

    robot.set_touch_enabled(false);
    assert!(!robot.move_to(x + 4.0, y));
}

// Closing the gate mid-gesture drops the matching Up on the floor. That is
// the shipped behavior of the original widget (its author flagged it and
// left it), so these tests pin it down rather than the corrected variant
// where an in-flight gesture would still complete.

#[test]
fn release_after_gate_closes_is_dropped() {
    let (mut robot, counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);

    assert!(robot.press_at(x, y));
    assert_pressed(&robot, "gesture started while enabled");

    robot.set_touch_enabled(false);
    assert!(!robot.release());

    assert_clicks(&counter, 0, "the gated Up never fires the handler");
    assert_pressed(&robot, "the inner press dangles with no matching Up");
}

#[test]
fn dangling_press_is_replaced_by_the_next_gesture() {
    let (mut robot, counter, bounds) = robot_with_item();
    let (x, y) = center(bounds);

    robot.press_at(x, y);
    robot.set_touch_enabled(false);
    robot.release();

    // Gate reopened: the next full gesture lands on top of the dangling
    // press and completes normally.
    robot.set_touch_enabled(true);
    assert!(robot.click_at(x, y));
    assert_clicks(&counter, 1, "only the completed gesture clicks");
    assert_not_pressed(&robot, "second gesture completed");
}
