//! Surface overrides: swap the default surface or extend its props.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::event::{BlurEvent, FocusEvent};
use crate::handler::Handler;
use crate::surface::Surface;

/// Builds a replacement surface.
pub type SurfaceFactory = Rc<dyn Fn() -> Box<dyn Surface>>;

/// Props merged into the surface's props. `on_focus`/`on_blur` run before
/// the tab's own focus handling.
#[derive(Clone, Default)]
pub struct OverrideProps {
    pub attrs: BTreeMap<String, String>,
    pub on_focus: Option<Handler<FocusEvent>>,
    pub on_blur: Option<Handler<BlurEvent>>,
}

impl OverrideProps {
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn on_focus(mut self, handler: impl Fn(&FocusEvent) + 'static) -> Self {
        self.on_focus = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn(&BlurEvent) + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for OverrideProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideProps")
            .field("attrs", &self.attrs)
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

/// One override: an optional replacement surface plus extra props.
#[derive(Clone, Default)]
pub struct Override {
    pub component: Option<SurfaceFactory>,
    pub props: OverrideProps,
}

impl Override {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component<S: Surface + 'static>(mut self, build: impl Fn() -> S + 'static) -> Self {
        self.component = Some(Rc::new(move || Box::new(build()) as Box<dyn Surface>));
        self
    }

    pub fn props(mut self, props: OverrideProps) -> Self {
        self.props = props;
        self
    }
}

impl fmt::Debug for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Override")
            .field("component", &self.component.as_ref().map(|_| "..."))
            .field("props", &self.props)
            .finish()
    }
}

/// Overrides accepted by a tab, keyed by the part they replace.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tab: Option<Override>,
}

impl Overrides {
    pub fn tab(tab: Override) -> Self {
        Self { tab: Some(tab) }
    }
}

/// Pick the surface to render through and the props to merge into it.
pub fn resolve_override(
    tab_override: Option<&Override>,
    default: impl FnOnce() -> Box<dyn Surface>,
) -> (Box<dyn Surface>, OverrideProps) {
    match tab_override {
        Some(o) => {
            let surface = match &o.component {
                Some(build) => build(),
                None => default(),
            };
            (surface, o.props.clone())
        }
        None => (default(), OverrideProps::default()),
    }
}
