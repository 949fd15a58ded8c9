#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tuitab::{
    Content, Override, Overrides, ScrollIntoView, ScrollIntoViewOptions, Surface, SurfaceProps,
};

/// What a [`RecordingSurface`] saw.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub renders: Vec<SurfaceProps>,
    pub scrolls: Vec<ScrollIntoViewOptions>,
}

/// Test surface that records renders and scroll requests.
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
    scrollable: bool,
}

impl Surface for RecordingSurface {
    fn render(&mut self, props: &SurfaceProps, _children: &Content) {
        self.log.borrow_mut().renders.push(props.clone());
    }

    fn scroller(&mut self) -> Option<&mut dyn ScrollIntoView> {
        if self.scrollable {
            Some(self as &mut dyn ScrollIntoView)
        } else {
            None
        }
    }
}

impl ScrollIntoView for RecordingSurface {
    fn scroll_into_view(&mut self, options: ScrollIntoViewOptions) {
        self.log.borrow_mut().scrolls.push(options);
    }
}

/// Overrides that swap in a [`RecordingSurface`], plus its log.
pub fn recording(scrollable: bool) -> (Overrides, Rc<RefCell<SurfaceLog>>) {
    let log = Rc::new(RefCell::new(SurfaceLog::default()));
    let surface_log = log.clone();
    let tab = Override::new().component(move || RecordingSurface {
        log: surface_log.clone(),
        scrollable,
    });
    (Overrides::tab(tab), log)
}

/// Shared call log for callbacks.
pub type Calls = Rc<RefCell<Vec<String>>>;

pub fn calls() -> Calls {
    Rc::new(RefCell::new(Vec::new()))
}
