//! Pointer event enqueue plumbing.
//!
//! Platform integrations that receive input on their own callback surface
//! buffer events here and hand the queue to
//! [`PointerDispatcher::pump`](crate::PointerDispatcher::pump) on the UI
//! tick.

use super::types::{PointerEvent, PointerId};

#[derive(Default)]
pub struct PointerEventQueue {
    queue: Vec<(PointerId, PointerEvent)>,
}

impl PointerEventQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
