//! Pointer input model and dispatch plumbing for Gatebar.
//!
//! The widget crates only see two things from here: the immutable
//! [`PointerEvent`] value and the [`DispatchTarget`] trait. The
//! [`PointerDispatcher`] plays the role of the platform's event-delivery
//! mechanism: it synthesizes Down/Move/Up/Cancel events from cursor state and
//! routes them to a single registered target.

mod dispatcher;
mod queue;
mod types;

pub use dispatcher::*;
pub use queue::*;
pub use types::*;
