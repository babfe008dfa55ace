//! Toolbar widgets for Gatebar.
//!
//! Two widgets live here: [`Toolbar`], a plain header surface with a title,
//! a navigation icon, and action items, and [`GatedToolbar`], which wraps a
//! `Toolbar` and adds a runtime-togglable gate over pointer-input dispatch.

mod attrs;
mod context;
pub mod widgets;

pub use attrs::*;
pub use context::*;
pub use widgets::*;

// Re-export the vocabulary the widget API speaks.
pub use gatebar_input::{DispatchTarget, PointerEvent, PointerEventKind};
pub use gatebar_ui_graphics::{Dp, Point, Rect, Size};
