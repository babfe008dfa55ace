//! Pure math/data for geometry & units in Gatebar
//!
//! This crate contains the geometry primitives and unit types shared by the
//! input and widget crates. It has no dependencies of its own.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::{Dp, Px};
}
