use gatebar_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

/// Pointer ID type for tracking multi-touch gestures.
/// Currently only the single primary pointer (id=0) is produced, but this
/// design supports future multi-touch expansion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The primary pointer (mouse button 1, first touch)
    pub const PRIMARY: PointerId = PointerId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Immutable pointer event value with consumption tracking.
///
/// Targets inspect the event and may mark it consumed; they never mutate the
/// position or kind. The consumption flag is shared via `Rc<Cell>` so it
/// stays visible across copies made for local-coordinate dispatch.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub position: Point,
    pub global_position: Point,
    pub timestamp: Instant,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: PointerId::PRIMARY,
            kind,
            phase: match kind {
                PointerEventKind::Down => PointerPhase::Start,
                PointerEventKind::Move => PointerPhase::Move,
                PointerEventKind::Up => PointerPhase::End,
                PointerEventKind::Cancel => PointerPhase::Cancel,
            },
            position,
            global_position,
            timestamp: Instant::now(),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Creates a copy of this event with a new local position, sharing the consumption state.
    pub fn copy_with_local_position(&self, position: Point) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            phase: self.phase,
            position,
            global_position: self.global_position,
            timestamp: self.timestamp,
            consumed: self.consumed.clone(),
        }
    }
}

/// A node in the UI that can receive pointer events from the event-delivery
/// mechanism.
///
/// Returning `true` reports the event as consumed; `false` tells the caller
/// that nothing here handled it.
pub trait DispatchTarget {
    fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool;
}
