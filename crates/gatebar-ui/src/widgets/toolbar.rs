//! Base toolbar widget.
//!
//! A retained header surface: an optional navigation icon on the left, a
//! title next to it, and a row of action items right-aligned inside the
//! content padding. The host layout assigns the toolbar its size; the widget
//! computes item bounds from that size and its resolved style.
//!
//! Press handling follows the usual Down/Move/Up flow: Down over an enabled
//! region records the press and consumes the event, Up over the same region
//! fires the click handler, Up elsewhere abandons the press, Cancel clears it.

use crate::attrs::AttributeSet;
use crate::context::UiContext;
use gatebar_input::{DispatchTarget, PointerEvent, PointerEventKind};
use gatebar_ui_graphics::{Dp, Point, Rect, Size};
use smallvec::SmallVec;
use std::rc::Rc;

/// Resolved style values, all density-independent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolbarStyle {
    pub height: Dp,
    pub content_padding: Dp,
    pub item_size: Dp,
    pub item_spacing: Dp,
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            height: Dp(56.0),
            content_padding: Dp(4.0),
            item_size: Dp(48.0),
            item_spacing: Dp(4.0),
        }
    }
}

impl ToolbarStyle {
    /// Resolves a style from a declarative attribute bag. Recognized keys:
    /// `height`, `contentPadding`, `itemSize`, `itemSpacing`. Unknown keys
    /// are ignored.
    pub fn resolve(attrs: &AttributeSet) -> Self {
        let defaults = Self::default();
        Self {
            height: attrs.dp("height").unwrap_or(defaults.height),
            content_padding: attrs.dp("contentPadding").unwrap_or(defaults.content_padding),
            item_size: attrs.dp("itemSize").unwrap_or(defaults.item_size),
            item_spacing: attrs.dp("itemSpacing").unwrap_or(defaults.item_spacing),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionItemId(u32);

/// Interactive region the toolbar tracks a press for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressRegion {
    Navigation,
    Item(ActionItemId),
}

struct ActionItem {
    id: ActionItemId,
    label: String,
    enabled: bool,
    on_click: Rc<dyn Fn()>,
}

struct NavigationIcon {
    on_click: Rc<dyn Fn()>,
}

pub struct Toolbar {
    density: f32,
    style: ToolbarStyle,
    title: Option<String>,
    navigation: Option<NavigationIcon>,
    items: SmallVec<[ActionItem; 4]>,
    next_item_id: u32,
    size: Size,
    pressed: Option<PressRegion>,
}

impl Toolbar {
    pub fn new(ctx: &UiContext) -> Self {
        Self::build(ctx, ToolbarStyle::default(), None)
    }

    /// Builds the toolbar applying a declarative attribute bag. The `title`
    /// key is applied here; style keys go through [`ToolbarStyle::resolve`].
    pub fn with_attributes(ctx: &UiContext, attrs: &AttributeSet) -> Self {
        Self::build(
            ctx,
            ToolbarStyle::resolve(attrs),
            attrs.string("title").map(str::to_owned),
        )
    }

    fn build(ctx: &UiContext, style: ToolbarStyle, title: Option<String>) -> Self {
        Self {
            density: ctx.density,
            style,
            title,
            navigation: None,
            items: SmallVec::new(),
            next_item_id: 0,
            size: Size::ZERO,
            pressed: None,
        }
    }

    pub fn style(&self) -> &ToolbarStyle {
        &self.style
    }

    /// Preferred height in pixels at the construction density.
    pub fn preferred_height(&self) -> f32 {
        self.style.height.to_px(self.density)
    }

    /// Assigns the toolbar its laid-out size. Item bounds are derived from
    /// this on every query; nothing is cached.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn clear_title(&mut self) {
        self.title = None;
    }

    pub fn set_navigation_icon(&mut self, on_click: impl Fn() + 'static) {
        self.navigation = Some(NavigationIcon {
            on_click: Rc::new(on_click),
        });
    }

    pub fn clear_navigation_icon(&mut self) {
        self.navigation = None;
    }

    pub fn has_navigation_icon(&self) -> bool {
        self.navigation.is_some()
    }

    pub fn add_action_item(
        &mut self,
        label: impl Into<String>,
        on_click: impl Fn() + 'static,
    ) -> ActionItemId {
        let id = ActionItemId(self.next_item_id);
        self.next_item_id += 1;
        self.items.push(ActionItem {
            id,
            label: label.into(),
            enabled: true,
            on_click: Rc::new(on_click),
        });
        id
    }

    /// Removes an action item. Unknown ids are a no-op.
    pub fn remove_action_item(&mut self, id: ActionItemId) {
        self.items.retain(|item| item.id != id);
        if self.pressed == Some(PressRegion::Item(id)) {
            self.pressed = None;
        }
    }

    /// Enables or disables an action item. Disabled items keep their place in
    /// the layout but never consume events. Unknown ids are a no-op.
    pub fn set_item_enabled(&mut self, id: ActionItemId, enabled: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.enabled = enabled;
        }
    }

    pub fn is_item_enabled(&self, id: ActionItemId) -> Option<bool> {
        self.items.iter().find(|item| item.id == id).map(|i| i.enabled)
    }

    pub fn item_label(&self, id: ActionItemId) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|i| i.label.as_str())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The region currently holding a press, if any.
    pub fn pressed_region(&self) -> Option<PressRegion> {
        self.pressed
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// Navigation icon bounds: a square of item size at the left edge inside
    /// the content padding, centered vertically.
    pub fn navigation_bounds(&self) -> Option<Rect> {
        self.navigation.as_ref()?;
        let item = self.style.item_size.to_px(self.density);
        let padding = self.style.content_padding.to_px(self.density);
        Some(Rect {
            x: padding,
            y: (self.size.height - item) / 2.0,
            width: item,
            height: item,
        })
    }

    /// Bounds of an action item: squares right-aligned inside the content
    /// padding, laid out left-to-right in insertion order.
    pub fn item_bounds(&self, id: ActionItemId) -> Option<Rect> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let count = self.items.len();
        let item = self.style.item_size.to_px(self.density);
        let spacing = self.style.item_spacing.to_px(self.density);
        let padding = self.style.content_padding.to_px(self.density);

        let from_right = (count - index) as f32 * item + (count - 1 - index) as f32 * spacing;
        Some(Rect {
            x: self.size.width - padding - from_right,
            y: (self.size.height - item) / 2.0,
            width: item,
            height: item,
        })
    }

    fn hit_region(&self, position: Point) -> Option<PressRegion> {
        if !Rect::from_size(self.size).contains_point(position) {
            return None;
        }
        if let Some(bounds) = self.navigation_bounds() {
            if bounds.contains_point(position) {
                return Some(PressRegion::Navigation);
            }
        }
        for item in &self.items {
            if !item.enabled {
                continue;
            }
            if let Some(bounds) = self.item_bounds(item.id) {
                if bounds.contains_point(position) {
                    return Some(PressRegion::Item(item.id));
                }
            }
        }
        None
    }

    fn region_bounds(&self, region: PressRegion) -> Option<Rect> {
        match region {
            PressRegion::Navigation => self.navigation_bounds(),
            PressRegion::Item(id) => self.item_bounds(id),
        }
    }

    fn fire(&self, region: PressRegion) {
        let handler = match region {
            PressRegion::Navigation => self.navigation.as_ref().map(|nav| nav.on_click.clone()),
            PressRegion::Item(id) => self
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.on_click.clone()),
        };
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl DispatchTarget for Toolbar {
    fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => match self.hit_region(event.position) {
                Some(region) => {
                    if self.pressed.is_some() {
                        // The matching Up for the previous press never
                        // arrived; something upstream broke the sequence.
                        log::warn!("pointer down while a press is still outstanding");
                    }
                    self.pressed = Some(region);
                    event.consume();
                    true
                }
                None => false,
            },
            PointerEventKind::Move => {
                if self.pressed.is_some() {
                    event.consume();
                    true
                } else {
                    false
                }
            }
            PointerEventKind::Up => match self.pressed.take() {
                Some(region) => {
                    let over_region = self
                        .region_bounds(region)
                        .map_or(false, |bounds| bounds.contains_point(event.position));
                    if over_region {
                        self.fire(region);
                    }
                    event.consume();
                    true
                }
                None => false,
            },
            PointerEventKind::Cancel => {
                self.pressed = None;
                false
            }
        }
    }
}
