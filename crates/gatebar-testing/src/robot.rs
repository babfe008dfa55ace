//! Robot testing harness for toolbar widgets.
//!
//! The robot owns a dispatcher with the widget under test as its target and
//! exposes interaction verbs (press, move, release, click, cancel). Events
//! flow through the dispatcher's gesture tracking, not straight into the
//! widget, so mid-gesture behavior matches a live window shell.

use gatebar_input::PointerDispatcher;
use gatebar_ui::{GatedToolbar, Size, UiContext};
use std::cell::Cell;
use std::rc::Rc;

pub struct ToolbarRobot {
    dispatcher: PointerDispatcher<GatedToolbar>,
}

impl ToolbarRobot {
    pub fn new(toolbar: GatedToolbar) -> Self {
        Self {
            dispatcher: PointerDispatcher::new(toolbar),
        }
    }

    pub fn toolbar(&self) -> &GatedToolbar {
        self.dispatcher.target()
    }

    pub fn toolbar_mut(&mut self) -> &mut GatedToolbar {
        self.dispatcher.target_mut()
    }

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.toolbar_mut().set_touch_enabled(enabled);
    }

    /// Press and release at the given coordinates.
    ///
    /// Returns true if the toolbar consumed the whole click.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        let down = self.press_at(x, y);
        let up = self.release();
        down && up
    }

    /// Press at the given coordinates without releasing.
    pub fn press_at(&mut self, x: f32, y: f32) -> bool {
        self.dispatcher.set_cursor(x, y);
        self.dispatcher.pointer_pressed()
    }

    /// Move the cursor; during a press this continues the gesture.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.dispatcher.set_cursor(x, y)
    }

    /// Release the pointer at its current position.
    pub fn release(&mut self) -> bool {
        self.dispatcher.pointer_released()
    }

    /// Abort the active gesture, as a window shell does on focus loss.
    pub fn cancel(&mut self) {
        self.dispatcher.cancel_gesture();
    }
}

/// Creates a robot around a default-context [`GatedToolbar`] laid out at the
/// given size.
pub fn create_toolbar_robot(width: f32, height: f32) -> ToolbarRobot {
    let mut toolbar = GatedToolbar::new(&UiContext::default());
    toolbar.set_size(Size::new(width, height));
    ToolbarRobot::new(toolbar)
}

/// Shared click probe for wiring into action-item handlers.
#[derive(Clone, Default)]
pub struct ClickCounter {
    count: Rc<Cell<u32>>,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> impl Fn() + 'static {
        let count = self.count.clone();
        move || count.set(count.get() + 1)
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }
}
