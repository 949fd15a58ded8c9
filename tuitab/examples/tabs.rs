//! A scrolling strip of tabs in the terminal.
//!
//! Left/Right move focus, Enter/Space or a click select, q quits.
//! Logs go to `tabs.log`.

use std::cell::{Cell, RefCell};
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::LevelFilter;
use tuitab::logging::init_file_logger;
use tuitab::{
    observe_input, BlurEvent, ClickEvent, Event, FocusEvent, KeyEvent, Placement, Rect, Tab,
    TabProps, Viewport, WidthMode,
};

const TITLES: &[&str] = &[
    "Overview",
    "Logs",
    "Metrics",
    "Traces",
    "Alerts",
    "Billing",
    "Deployments",
    "Incidents",
    "Runbooks",
    "Audit",
];
const DISABLED: usize = 5;
const SLOT: u16 = 14;

/// Demo tab-list: owns which tab is active and which has focus.
struct Strip {
    tabs: Vec<Tab>,
    viewport: Rc<RefCell<Viewport>>,
    selected: Rc<Cell<Option<usize>>>,
    active: usize,
    focused: Option<usize>,
}

impl Strip {
    fn new(width: u16) -> Self {
        let mut viewport = Viewport::new(width, 1);
        viewport.set_content_size(SLOT * TITLES.len() as u16, 1);

        let mut strip = Self {
            tabs: Vec::new(),
            viewport: Rc::new(RefCell::new(viewport)),
            selected: Rc::new(Cell::new(None)),
            active: 0,
            focused: None,
        };
        for i in 0..TITLES.len() {
            let tab = Tab::mount(strip.props(i));
            strip.tabs.push(tab);
        }
        strip
    }

    fn rect(i: usize) -> Rect {
        Rect::new(SLOT * i as u16, 0, SLOT, 1)
    }

    fn props(&self, i: usize) -> TabProps {
        let selected = self.selected.clone();
        TabProps::new(format!("tab-{i}"))
            .title(TITLES[i])
            .active(i == self.active)
            .disabled(i == DISABLED)
            .width_mode(WidthMode::Equal)
            .placement(Placement::new(self.viewport.clone(), Self::rect(i)))
            .on_select(move || selected.set(Some(i)))
    }

    fn move_focus(&mut self, to: usize) {
        if self.focused == Some(to) {
            return;
        }
        if let Some(old) = self.focused {
            self.tabs[old].dispatch(&mut Event::Blur(BlurEvent {
                new_target: Some(format!("tab-{to}")),
            }));
        }
        self.tabs[to].dispatch(&mut Event::Focus(FocusEvent::new()));
        self.focused = Some(to);
    }

    /// Apply a selection reported through `on_select`.
    fn sync(&mut self) {
        if let Some(selected) = self.selected.take() {
            self.active = selected;
            for i in 0..self.tabs.len() {
                let props = self.props(i);
                self.tabs[i].update(props);
            }
        }
        self.viewport.borrow_mut().settle();
    }

    fn hit(&self, x: u16) -> Option<usize> {
        let offset = self.viewport.borrow().offset().x;
        let i = usize::from(x.checked_add(offset)? / SLOT);
        (i < self.tabs.len()).then_some(i)
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        let viewport = self.viewport.borrow();
        let offset = viewport.offset();
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
        for (i, tab) in self.tabs.iter().enumerate() {
            let rect = Self::rect(i);
            if !viewport.is_visible(rect) {
                continue;
            }
            let Some(rendered) = tab.rendered() else {
                continue;
            };
            queue!(out, cursor::MoveTo(rect.x - offset.x, 0))?;
            if rendered.props.style.active {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            if rendered.props.is_focus_visible {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            if rendered.props.style.disabled {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            queue!(out, Print(&rendered.line), SetAttribute(Attribute::Reset))?;
        }
        queue!(
            out,
            cursor::MoveTo(0, 2),
            Print(format!("active: {}", TITLES[self.active]))
        )?;
        out.flush()
    }
}

fn main() -> tuitab::Result<()> {
    init_file_logger("tabs.log", LevelFilter::Debug)?;

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut out);

    execute!(
        out,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut Stdout) -> tuitab::Result<()> {
    let (width, _) = terminal::size()?;
    let mut strip = Strip::new(width);

    loop {
        strip.draw(out)?;

        let raw = event::read()?;
        observe_input(&raw);

        match &raw {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Left => {
                    let to = strip.focused.map_or(0, |i| i.saturating_sub(1));
                    strip.move_focus(to);
                }
                KeyCode::Right => {
                    let to = strip
                        .focused
                        .map_or(0, |i| (i + 1).min(strip.tabs.len() - 1));
                    strip.move_focus(to);
                }
                _ => {
                    if let (Some(i), Some(key)) = (strip.focused, KeyEvent::from_crossterm(key)) {
                        strip.tabs[i].dispatch(&mut Event::Key(key));
                    }
                }
            },
            CrosstermEvent::Mouse(mouse) => {
                if let Some(click) = ClickEvent::from_mouse(mouse) {
                    if let Some(i) = strip.hit(click.x) {
                        strip.move_focus(i);
                        strip.tabs[i].dispatch(&mut Event::Click(click));
                    }
                }
            }
            _ => {}
        }

        strip.sync();
    }
}
