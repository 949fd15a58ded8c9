pub mod config;
pub mod error;
pub mod event;
pub mod focus_visible;
pub mod handler;
pub mod layout;
pub mod logging;
pub mod overrides;
pub mod scroll;
pub mod surface;
pub mod tab;

pub use config::{Orientation, TabConfig, WidthMode};
pub use error::{Result, TabError};
pub use event::{
    BlurEvent, ClickEvent, Event, EventResult, FocusEvent, FocusOrigin, Key, KeyEvent, Modifiers,
    MouseButton,
};
pub use focus_visible::{
    observe_input, FocusVisibility, FocusVisibleState, Modality, ModalityTracker,
};
pub use handler::{fork, Handler, KeyHandler, SelectHandler};
pub use layout::Rect;
pub use overrides::{resolve_override, Override, OverrideProps, Overrides, SurfaceFactory};
pub use scroll::{ScrollAlign, ScrollBehavior, ScrollIntoViewOptions, ScrollOffset, Viewport};
pub use surface::{
    Placement, RenderedTab, Role, ScrollIntoView, SharedStyleProps, StyledTab, Surface,
    SurfaceProps,
};
pub use tab::{Content, Tab, TabProps};
