/// Input events delivered to a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press while the tab is focused
    Key(KeyEvent),
    /// Pointer click on the tab
    Click(ClickEvent),
    /// Tab gained focus
    Focus(FocusEvent),
    /// Tab lost focus
    Blur(BlurEvent),
}

/// Result of a tab handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was not handled; the tab-list may act on it.
    #[default]
    Ignored,
    /// Event was handled but nothing was selected.
    Handled,
    /// The tab was selected.
    Activated,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// A bare modifier key (Ctrl, Alt, Shift, Super) pressed on its own.
    Modifier,
    /// Anything crossterm reports that has no mapping here.
    Other,
}

impl Key {
    /// Legacy numeric key code for the key, where one exists.
    ///
    /// Printable characters report their code point, so Space is 32.
    pub fn code(&self) -> Option<u32> {
        match self {
            Key::Char(c) => Some(*c as u32),
            Key::Enter => Some(13),
            Key::Backspace => Some(8),
            Key::Tab | Key::BackTab => Some(9),
            Key::Escape => Some(27),
            Key::PageUp => Some(33),
            Key::PageDown => Some(34),
            Key::End => Some(35),
            Key::Home => Some(36),
            Key::Left => Some(37),
            Key::Up => Some(38),
            Key::Right => Some(39),
            Key::Down => Some(40),
            Key::Insert => Some(45),
            Key::Delete => Some(46),
            Key::F(n) => Some(111 + u32::from(*n)),
            Key::Modifier | Key::Other => None,
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

/// A key press. Handlers may suppress its default action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            default_prevented: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Convert a crossterm key event. Only presses are key-downs; repeats
    /// and releases (reported with keyboard enhancement or on Windows)
    /// yield `None`.
    pub fn from_crossterm(event: &crossterm::event::KeyEvent) -> Option<Self> {
        if event.kind != crossterm::event::KeyEventKind::Press {
            return None;
        }
        Some(Self::new(event.code.into()).with_modifiers(event.modifiers.into()))
    }

    /// Numeric key code (see [`Key::code`]).
    pub fn which(&self) -> Option<u32> {
        self.key.code()
    }

    /// Suppress the host's default handling of this key (e.g. Space scrolling the page).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer click, in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

impl ClickEvent {
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Convert a crossterm mouse event. Only button presses are clicks.
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        match event.kind {
            crossterm::event::MouseEventKind::Down(button) => Some(Self {
                x: event.column,
                y: event.row,
                button: button.into(),
            }),
            _ => None,
        }
    }
}

/// Input modality that moved focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOrigin {
    Keyboard,
    Pointer,
    /// Focus was moved from code (e.g. the parent restoring focus).
    Programmatic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusEvent {
    /// Known origin of the focus change, if the dispatcher knows it.
    /// When `None` the focus-visibility heuristic decides.
    pub origin: Option<FocusOrigin>,
}

impl FocusEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyboard() -> Self {
        Self {
            origin: Some(FocusOrigin::Keyboard),
        }
    }

    pub fn pointer() -> Self {
        Self {
            origin: Some(FocusOrigin::Pointer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlurEvent {
    /// Element receiving focus, if any.
    pub new_target: Option<String>,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            KeyCode::Modifier(_) => Key::Modifier,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
