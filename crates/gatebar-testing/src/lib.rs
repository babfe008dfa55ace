//! Testing utilities and harness for Gatebar.
//!
//! The [`ToolbarRobot`] drives a [`gatebar_ui::GatedToolbar`] through a real
//! [`gatebar_input::PointerDispatcher`], so tests exercise the same event
//! stream a window shell would produce.

mod robot;
mod robot_assertions;

pub use robot::*;
pub use robot_assertions::*;
