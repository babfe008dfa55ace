//! Pointer event delivery.
//!
//! [`PointerDispatcher`] stands in for the platform's event-delivery
//! mechanism: it owns one [`DispatchTarget`], synthesizes events from cursor
//! and press state, and keeps a per-pointer gesture record so that the
//! target which received Down keeps receiving Move and Up/Cancel. The
//! delivery stream does not depend on the target's return values; those only
//! travel back to the caller.

use crate::queue::PointerEventQueue;
use crate::types::{DispatchTarget, PointerEvent, PointerEventKind, PointerId};
use gatebar_ui_graphics::Point;
use std::collections::HashMap;

/// Tracks which pointers have an active gesture, keyed by pointer ID.
///
/// Stores the Down position per pointer. Mirrors hit-path tracking in a
/// full view tree, collapsed to a single target: identity is implicit, only
/// the gesture lifetime needs recording.
pub struct GestureTracker {
    active: HashMap<PointerId, Point>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
        }
    }

    /// Records a gesture start. Called on pointer Down.
    pub fn begin_gesture(&mut self, pointer: PointerId, origin: Point) {
        self.active.insert(pointer, origin);
    }

    /// Returns true if there's an active gesture for this pointer.
    pub fn has_gesture(&self, pointer: PointerId) -> bool {
        self.active.contains_key(&pointer)
    }

    /// The Down position of the active gesture, if any.
    pub fn origin(&self, pointer: PointerId) -> Option<Point> {
        self.active.get(&pointer).copied()
    }

    /// Removes and returns the gesture record. Called on Up/Cancel.
    pub fn end_gesture(&mut self, pointer: PointerId) -> Option<Point> {
        self.active.remove(&pointer)
    }

    /// Clears all tracked gestures. Called on gesture cancel.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthesizes and delivers pointer events to a single owned target.
///
/// The entry points match what a window shell calls from its native event
/// callbacks: `set_cursor`, `pointer_pressed`, `pointer_released`,
/// `cancel_gesture`. Each returns whether the target consumed the event.
pub struct PointerDispatcher<T: DispatchTarget> {
    target: T,
    cursor: (f32, f32),
    primary_pressed: bool,
    gestures: GestureTracker,
}

impl<T: DispatchTarget> PointerDispatcher<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            cursor: (0.0, 0.0),
            primary_pressed: false,
            gestures: GestureTracker::new(),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) -> bool {
        self.cursor = (x, y);

        // During a gesture (pointer held down), ONLY the gesture path
        // receives moves. This maintains the invariant: whoever received
        // Down receives Move and Up/Cancel.
        if self.primary_pressed {
            if self.gestures.has_gesture(PointerId::PRIMARY) {
                return self.deliver(PointerEventKind::Move);
            }
            // Pointer is down but the gesture started outside this surface.
            // Do not dispatch anything.
            return false;
        }

        // No gesture in progress: regular hover move.
        self.deliver(PointerEventKind::Move)
    }

    pub fn pointer_pressed(&mut self) -> bool {
        self.primary_pressed = true;
        self.gestures.begin_gesture(
            PointerId::PRIMARY,
            Point::new(self.cursor.0, self.cursor.1),
        );
        self.deliver(PointerEventKind::Down)
    }

    pub fn pointer_released(&mut self) -> bool {
        self.primary_pressed = false;

        if self.gestures.end_gesture(PointerId::PRIMARY).is_none() {
            return false;
        }
        self.deliver(PointerEventKind::Up)
    }

    /// Cancels any active gesture, dispatching a Cancel event to the target.
    /// Call this when the window loses focus or the pointer leaves the
    /// surface while a button is pressed.
    pub fn cancel_gesture(&mut self) {
        let had_gesture = self.gestures.end_gesture(PointerId::PRIMARY).is_some();
        self.gestures.clear();
        self.primary_pressed = false;

        if had_gesture {
            self.deliver(PointerEventKind::Cancel);
        }
    }

    /// Drains a platform event buffer into the target.
    ///
    /// Integrations that receive input on their own callback surface buffer
    /// raw events in a [`PointerEventQueue`] and hand them over here on the
    /// UI tick. Cursor and gesture state are updated from each event before
    /// it is delivered, so a following `pointer_released` or `set_cursor`
    /// continues from where the buffered stream left off.
    pub fn pump(&mut self, queue: &mut PointerEventQueue) -> usize {
        let mut events = Vec::new();
        queue.drain(|_, event| events.push(event));
        let delivered = events.len();

        for event in events {
            self.cursor = (event.position.x, event.position.y);
            match event.kind {
                PointerEventKind::Down => {
                    self.primary_pressed = true;
                    self.gestures.begin_gesture(event.id, event.position);
                }
                PointerEventKind::Up | PointerEventKind::Cancel => {
                    self.primary_pressed = false;
                    self.gestures.end_gesture(event.id);
                }
                PointerEventKind::Move => {}
            }
            let consumed = self.target.dispatch_pointer_event(&event);
            log::trace!(
                "pumped {:?} at ({}, {}) consumed={}",
                event.kind,
                event.position.x,
                event.position.y,
                consumed
            );
        }
        delivered
    }

    fn deliver(&mut self, kind: PointerEventKind) -> bool {
        let position = Point::new(self.cursor.0, self.cursor.1);
        let event = PointerEvent::new(kind, position, position);
        let consumed = self.target.dispatch_pointer_event(&event);
        log::trace!(
            "dispatched {:?} at ({}, {}) consumed={}",
            kind,
            position.x,
            position.y,
            consumed
        );
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every delivered event kind and answers with a fixed result.
    struct RecordingTarget {
        seen: Vec<PointerEventKind>,
        consume: bool,
    }

    impl RecordingTarget {
        fn new(consume: bool) -> Self {
            Self {
                seen: Vec::new(),
                consume,
            }
        }
    }

    impl DispatchTarget for RecordingTarget {
        fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool {
            self.seen.push(event.kind);
            if self.consume {
                event.consume();
            }
            self.consume
        }
    }

    #[test]
    fn press_move_release_delivers_full_sequence() {
        let mut dispatcher = PointerDispatcher::new(RecordingTarget::new(true));

        dispatcher.set_cursor(10.0, 10.0);
        assert!(dispatcher.pointer_pressed());
        assert!(dispatcher.set_cursor(12.0, 10.0));
        assert!(dispatcher.pointer_released());

        assert_eq!(
            dispatcher.target().seen,
            vec![
                PointerEventKind::Move,
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Up,
            ]
        );
    }

    #[test]
    fn release_without_press_delivers_nothing() {
        let mut dispatcher = PointerDispatcher::new(RecordingTarget::new(true));

        assert!(!dispatcher.pointer_released());
        assert!(dispatcher.target().seen.is_empty());
    }

    #[test]
    fn delivery_ignores_target_return_value() {
        // The platform keeps the event stream flowing even when the target
        // rejects Down. This is what lets a target desynchronize its own
        // state if it starts rejecting mid-gesture.
        let mut dispatcher = PointerDispatcher::new(RecordingTarget::new(false));

        dispatcher.set_cursor(5.0, 5.0);
        assert!(!dispatcher.pointer_pressed());
        assert!(!dispatcher.set_cursor(6.0, 5.0));
        assert!(!dispatcher.pointer_released());

        assert_eq!(
            dispatcher.target().seen,
            vec![
                PointerEventKind::Move,
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Up,
            ]
        );
    }

    #[test]
    fn cancel_ends_the_gesture() {
        let mut dispatcher = PointerDispatcher::new(RecordingTarget::new(true));

        dispatcher.pointer_pressed();
        dispatcher.cancel_gesture();
        // Release after cancel has no gesture to finish.
        assert!(!dispatcher.pointer_released());

        assert_eq!(
            dispatcher.target().seen,
            vec![PointerEventKind::Down, PointerEventKind::Cancel]
        );
    }

    #[test]
    fn pump_drains_buffered_events_into_the_target() {
        let mut dispatcher = PointerDispatcher::new(RecordingTarget::new(true));
        let mut queue = PointerEventQueue::new();
        let at = Point::new(3.0, 4.0);
        queue.push(PointerEvent::new(PointerEventKind::Down, at, at));
        queue.push(PointerEvent::new(PointerEventKind::Up, at, at));

        let delivered = dispatcher.pump(&mut queue);

        assert_eq!(delivered, 2);
        assert!(queue.is_empty());
        assert_eq!(
            dispatcher.target().seen,
            vec![PointerEventKind::Down, PointerEventKind::Up]
        );
        assert_eq!(dispatcher.cursor(), (3.0, 4.0));
        // The buffered Up already ended the gesture.
        assert!(!dispatcher.pointer_released());
    }

    #[test]
    fn pumped_down_hands_the_gesture_to_the_direct_entry_points() {
        let mut dispatcher = PointerDispatcher::new(RecordingTarget::new(true));
        let mut queue = PointerEventQueue::new();
        let at = Point::new(3.0, 4.0);
        queue.push(PointerEvent::new(PointerEventKind::Down, at, at));

        dispatcher.pump(&mut queue);
        assert!(dispatcher.set_cursor(5.0, 4.0));
        assert!(dispatcher.pointer_released());

        assert_eq!(
            dispatcher.target().seen,
            vec![
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Up,
            ]
        );
    }

    #[test]
    fn gesture_tracker_begin_end() {
        let mut tracker = GestureTracker::new();
        tracker.begin_gesture(PointerId::PRIMARY, Point::new(1.0, 2.0));

        assert!(tracker.has_gesture(PointerId::PRIMARY));
        assert_eq!(tracker.origin(PointerId::PRIMARY), Some(Point::new(1.0, 2.0)));

        let removed = tracker.end_gesture(PointerId::PRIMARY);
        assert_eq!(removed, Some(Point::new(1.0, 2.0)));
        assert!(tracker.is_empty());
    }
}
