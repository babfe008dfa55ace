//! UI Widget components

pub mod gated_toolbar;
pub mod toolbar;

pub use gated_toolbar::*;
pub use toolbar::*;
