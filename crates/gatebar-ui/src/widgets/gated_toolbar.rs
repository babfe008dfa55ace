//! Toolbar with gateable touch dispatch.
//!
//! [`GatedToolbar`] composes a plain [`Toolbar`] and adds one piece of
//! state: a boolean gate over pointer-input dispatch. With the gate open the
//! widget is indistinguishable from the inner toolbar; with the gate closed
//! every incoming event is reported as not consumed and the inner toolbar's
//! dispatch logic does not run.

use crate::attrs::AttributeSet;
use crate::context::UiContext;
use crate::widgets::toolbar::{ActionItemId, PressRegion, Toolbar};
use gatebar_input::{DispatchTarget, PointerEvent};
use gatebar_ui_graphics::{Rect, Size};

pub struct GatedToolbar {
    inner: Toolbar,
    touch_enabled: bool,
}

impl GatedToolbar {
    /// Equivalent to constructing a plain [`Toolbar`]; the gate starts open.
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            inner: Toolbar::new(ctx),
            touch_enabled: true,
        }
    }

    pub fn with_attributes(ctx: &UiContext, attrs: &AttributeSet) -> Self {
        Self {
            inner: Toolbar::with_attributes(ctx, attrs),
            touch_enabled: true,
        }
    }

    /// Opens or closes the touch gate. Idempotent; takes effect from the
    /// next dispatched event.
    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.inner
    }

    pub fn toolbar_mut(&mut self) -> &mut Toolbar {
        &mut self.inner
    }

    // The inherited toolbar surface, delegated unmodified.

    pub fn set_size(&mut self, size: Size) {
        self.inner.set_size(size);
    }

    pub fn size(&self) -> Size {
        self.inner.size()
    }

    pub fn title(&self) -> Option<&str> {
        self.inner.title()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.inner.set_title(title);
    }

    pub fn set_navigation_icon(&mut self, on_click: impl Fn() + 'static) {
        self.inner.set_navigation_icon(on_click);
    }

    pub fn add_action_item(
        &mut self,
        label: impl Into<String>,
        on_click: impl Fn() + 'static,
    ) -> ActionItemId {
        self.inner.add_action_item(label, on_click)
    }

    pub fn remove_action_item(&mut self, id: ActionItemId) {
        self.inner.remove_action_item(id);
    }

    pub fn set_item_enabled(&mut self, id: ActionItemId, enabled: bool) {
        self.inner.set_item_enabled(id, enabled);
    }

    pub fn item_bounds(&self, id: ActionItemId) -> Option<Rect> {
        self.inner.item_bounds(id)
    }

    pub fn navigation_bounds(&self) -> Option<Rect> {
        self.inner.navigation_bounds()
    }

    pub fn pressed_region(&self) -> Option<PressRegion> {
        self.inner.pressed_region()
    }
}

impl DispatchTarget for GatedToolbar {
    fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool {
        // FIXME: rejecting events here mid-gesture breaks the Down/Move/Up
        // sequence the inner toolbar sees; a press that started while the
        // gate was open never receives its matching Up.
        if !self.touch_enabled {
            return false;
        }
        self.inner.dispatch_pointer_event(event)
    }
}
