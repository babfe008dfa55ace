/// Construction-time rendering context.
///
/// Widgets are built against a context the same way platform views are built
/// against their rendering context; for now it carries the display density
/// used to resolve `Dp` attributes to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiContext {
    pub density: f32,
}

impl UiContext {
    pub fn new(density: f32) -> Self {
        Self { density }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}
