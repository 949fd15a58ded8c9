//! The tab element.
//!
//! A [`Tab`] is mounted by its tab-list with a set of [`TabProps`], updated
//! whenever those props change, and unmounted when the tab-list drops it.
//! In between it receives input [`Event`]s:
//!
//! - focus/blur drive the focus-visible flag (keyboard focus only)
//! - clicks and Enter/Space select the tab through `on_select`
//! - becoming active scrolls the surface into view
//!
//! Which tab is active is owned by the tab-list; a tab never changes its
//! own `active` prop.

use std::fmt;
use std::rc::Rc;

use crate::config::{Orientation, WidthMode};
use crate::event::{BlurEvent, ClickEvent, Event, EventResult, FocusEvent, Key, KeyEvent};
use crate::focus_visible::{FocusVisibility, FocusVisibleState, ModalityTracker};
use crate::handler::{emit, fork, Handler, KeyHandler, SelectHandler};
use crate::overrides::{resolve_override, OverrideProps, Overrides};
use crate::scroll::{reveal_on_mount, reveal_on_update, ScrollIntoViewOptions};
use crate::surface::{
    Placement, RenderedTab, Role, SharedStyleProps, StyledTab, Surface, SurfaceProps,
};

/// Legacy key code of the Space bar.
const SPACE: u32 = 32;

/// Renderable tab content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
}

/// Props a tab-list passes to a tab.
#[derive(Clone, Default)]
pub struct TabProps {
    pub id: String,
    pub active: bool,
    pub disabled: bool,
    pub orientation: Orientation,
    pub width_mode: WidthMode,
    pub title: String,
    pub children: Content,
    pub on_select: Option<SelectHandler>,
    pub on_click: Option<Handler<ClickEvent>>,
    pub on_key_down: Option<KeyHandler>,
    pub overrides: Overrides,
    pub placement: Option<Placement>,
}

impl TabProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn width_mode(mut self, width_mode: WidthMode) -> Self {
        self.width_mode = width_mode;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn children(mut self, children: Content) -> Self {
        self.children = children;
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.children(Content::Text(text.into()))
    }

    pub fn on_select(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn on_key_down(mut self, handler: impl Fn(&mut KeyEvent) + 'static) -> Self {
        self.on_key_down = Some(Rc::new(handler));
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

impl fmt::Debug for TabProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabProps")
            .field("id", &self.id)
            .field("active", &self.active)
            .field("disabled", &self.disabled)
            .field("orientation", &self.orientation)
            .field("width_mode", &self.width_mode)
            .field("title", &self.title)
            .field("children", &self.children)
            .field("on_select", &self.on_select.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("overrides", &self.overrides)
            .field("placement", &self.placement.as_ref().map(|p| p.rect))
            .finish()
    }
}

/// A mounted tab.
pub struct Tab {
    props: TabProps,
    focus: FocusVisibleState,
    focus_visibility: Option<Rc<dyn FocusVisibility>>,
    /// Written at mount, cleared at unmount.
    surface: Option<Box<dyn Surface>>,
    override_props: OverrideProps,
}

impl Tab {
    /// Mount with this thread's shared [`ModalityTracker`], fed through
    /// [`observe_input`](crate::focus_visible::observe_input). Use
    /// [`Tab::mount_with`] to supply another heuristic.
    pub fn mount(props: TabProps) -> Self {
        let heuristic: Rc<dyn FocusVisibility> = ModalityTracker::shared();
        Self::mount_with(props, Some(heuristic))
    }

    /// Mount with the given focus-visibility heuristic. Without one, focus
    /// is never shown.
    pub fn mount_with(props: TabProps, focus_visibility: Option<Rc<dyn FocusVisibility>>) -> Self {
        let (surface, override_props) =
            resolve_override(props.overrides.tab.as_ref(), || {
                Box::new(StyledTab::new()) as Box<dyn Surface>
            });

        log::debug!(
            "[tab] mount {} (active={}, disabled={})",
            props.id, props.active, props.disabled
        );

        let mut tab = Self {
            props,
            focus: FocusVisibleState::new(),
            focus_visibility,
            surface: Some(surface),
            override_props,
        };
        tab.render();
        if let Some(options) = reveal_on_mount(tab.props.active) {
            tab.request_scroll(options);
        }
        tab
    }

    /// Apply new props from the tab-list and re-render.
    ///
    /// The surface chosen at mount is kept; only the override props are
    /// picked up again.
    pub fn update(&mut self, props: TabProps) {
        if !self.is_mounted() {
            log::trace!("[tab] update of unmounted tab {} ignored", props.id);
            return;
        }
        let was_active = self.props.active;
        self.override_props = props
            .overrides
            .tab
            .as_ref()
            .map(|o| o.props.clone())
            .unwrap_or_default();
        self.props = props;
        self.render();

        if let Some(options) = reveal_on_update(was_active, self.props.active) {
            self.request_scroll(options);
        }
    }

    /// Detach the surface. Later events and updates are ignored.
    pub fn unmount(&mut self) {
        if self.surface.take().is_some() {
            log::debug!("[tab] unmount {}", self.props.id);
        }
        self.focus = FocusVisibleState::new();
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn id(&self) -> &str {
        &self.props.id
    }

    pub fn props(&self) -> &TabProps {
        &self.props
    }

    pub fn is_focus_visible(&self) -> bool {
        self.focus.is_visible()
    }

    pub fn surface(&self) -> Option<&dyn Surface> {
        self.surface.as_deref()
    }

    /// Output of the last render, if the surface keeps one.
    pub fn rendered(&self) -> Option<&RenderedTab> {
        self.surface.as_deref()?.rendered()
    }

    /// Props handed to the surface on render.
    pub fn surface_props(&self) -> SurfaceProps {
        let TabProps {
            id,
            active,
            disabled,
            orientation,
            width_mode,
            title,
            ..
        } = &self.props;

        SurfaceProps {
            id: id.clone(),
            role: Role::Tab,
            tab_index: if *disabled { -1 } else { 0 },
            aria_selected: *active,
            aria_disabled: disabled.then_some(true),
            is_focus_visible: self.focus.is_visible(),
            style: SharedStyleProps {
                disabled: *disabled,
                active: *active,
                orientation: *orientation,
                width_mode: *width_mode,
            },
            title: title.clone(),
            attrs: self.override_props.attrs.clone(),
        }
    }

    /// Route an event to its handler.
    pub fn dispatch(&mut self, event: &mut Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key_down(key),
            Event::Click(click) => self.handle_click(click),
            Event::Focus(focus) => self.handle_focus(focus),
            Event::Blur(blur) => self.handle_blur(blur),
        }
    }

    pub fn handle_focus(&mut self, event: &FocusEvent) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        let heuristic = self.focus_visibility.clone();
        let focus = &mut self.focus;
        let mut changed = false;
        {
            let mut handler = fork(self.override_props.on_focus.clone(), |e: &FocusEvent| {
                changed = focus.on_focus(e, heuristic.as_deref());
            });
            handler(event);
        }
        if changed {
            log::debug!("[tab] {} focus visible", self.props.id);
            self.render();
        }
        EventResult::Handled
    }

    pub fn handle_blur(&mut self, event: &BlurEvent) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        let focus = &mut self.focus;
        let mut changed = false;
        {
            let mut handler = fork(self.override_props.on_blur.clone(), |_: &BlurEvent| {
                changed = focus.on_blur();
            });
            handler(event);
        }
        if changed {
            log::debug!("[tab] {} focus hidden", self.props.id);
            self.render();
        }
        EventResult::Handled
    }

    /// Pointer activation: `on_click` then `on_select`, unless disabled.
    pub fn handle_click(&mut self, event: &ClickEvent) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        if self.props.disabled {
            log::trace!("[tab] {} is disabled, click absorbed", self.props.id);
            return EventResult::Ignored;
        }
        emit(self.props.on_click.as_ref(), event);
        self.select();
        EventResult::Activated
    }

    /// Keyboard activation: `on_key_down` first, then Enter or Space select
    /// the tab. Space also suppresses the key's default action.
    pub fn handle_key_down(&mut self, event: &mut KeyEvent) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }
        if self.props.disabled {
            log::trace!("[tab] {} is disabled, key {:?} absorbed", self.props.id, event.key);
            return EventResult::Ignored;
        }
        if let Some(on_key_down) = &self.props.on_key_down {
            on_key_down(&mut *event);
        }

        let is_space = event.which() == Some(SPACE);
        if event.key == Key::Enter || is_space {
            self.select();
            if is_space {
                event.prevent_default();
            }
            return EventResult::Activated;
        }
        EventResult::Ignored
    }

    fn select(&self) {
        log::debug!("[tab] select {}", self.props.id);
        if let Some(on_select) = &self.props.on_select {
            on_select();
        }
    }

    fn render(&mut self) {
        let props = self.surface_props();
        if let Some(surface) = self.surface.as_mut() {
            surface.place(self.props.placement.as_ref());
            surface.render(&props, &self.props.children);
        }
    }

    fn request_scroll(&mut self, options: ScrollIntoViewOptions) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match surface.scroller() {
            Some(scroller) => {
                log::debug!("[tab] scroll {} into view: {:?}", self.props.id, options);
                scroller.scroll_into_view(options);
            }
            None => log::trace!("[tab] surface of {} cannot scroll, skipped", self.props.id),
        }
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("props", &self.props)
            .field("focus_visible", &self.focus.is_visible())
            .field("mounted", &self.is_mounted())
            .field("override_props", &self.override_props)
            .finish()
    }
}
