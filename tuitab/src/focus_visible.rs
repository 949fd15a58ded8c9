//! Focus-visibility: show a focus indicator for keyboard focus only.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::event::{FocusEvent, FocusOrigin};

/// Classifies a focus event as keyboard-driven (indicator shown) or
/// pointer-driven (indicator suppressed).
pub trait FocusVisibility {
    fn is_focus_visible(&self, event: &FocusEvent) -> bool;
}

/// Last input modality seen by a [`ModalityTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    #[default]
    Keyboard,
    Pointer,
}

/// Tracks the modality of the most recent raw input.
///
/// Feed it every raw terminal event before dispatching focus changes.
/// Starts out in keyboard modality. Chords held with Ctrl, Alt or Super
/// do not count as keyboard input.
#[derive(Debug, Default)]
pub struct ModalityTracker {
    modality: Cell<Modality>,
}

impl ModalityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modality(&self) -> Modality {
        self.modality.get()
    }

    /// Record the modality of a raw crossterm event.
    pub fn observe(&self, raw: &CrosstermEvent) {
        match raw {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return;
                }
                let chord = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER;
                if key_event.modifiers.intersects(chord) {
                    return;
                }
                self.set(Modality::Keyboard);
            }
            CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(_) | MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    self.set(Modality::Pointer);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn set(&self, modality: Modality) {
        if self.modality.get() != modality {
            log::trace!("[focus_visible] modality {:?} -> {:?}", self.modality.get(), modality);
            self.modality.set(modality);
        }
    }
}

impl FocusVisibility for ModalityTracker {
    fn is_focus_visible(&self, event: &FocusEvent) -> bool {
        match event.origin {
            Some(FocusOrigin::Keyboard) => true,
            Some(FocusOrigin::Pointer) => false,
            Some(FocusOrigin::Programmatic) | None => self.modality.get() == Modality::Keyboard,
        }
    }
}

// Tracker shared by every tab mounted with `Tab::mount` on this thread.
thread_local! {
    static SHARED_TRACKER: Rc<ModalityTracker> = Rc::new(ModalityTracker::new());
}

impl ModalityTracker {
    /// The tracker [`Tab::mount`](crate::Tab::mount) installs on this thread.
    pub fn shared() -> Rc<ModalityTracker> {
        SHARED_TRACKER.with(Rc::clone)
    }
}

/// Feed a raw terminal event to this thread's shared tracker.
///
/// Call it for every event read from the terminal, before dispatching
/// focus changes to tabs mounted with [`Tab::mount`](crate::Tab::mount).
pub fn observe_input(raw: &CrosstermEvent) {
    SHARED_TRACKER.with(|tracker| tracker.observe(raw));
}

/// Visual-focus flag owned by a single tab.
#[derive(Debug, Default)]
pub struct FocusVisibleState {
    visible: bool,
}

impl FocusVisibleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle a focus event. Pointer focus never clears the flag.
    /// Returns true if the flag changed.
    pub fn on_focus(&mut self, event: &FocusEvent, heuristic: Option<&dyn FocusVisibility>) -> bool {
        let Some(heuristic) = heuristic else {
            return false;
        };
        if heuristic.is_focus_visible(event) && !self.visible {
            self.visible = true;
            return true;
        }
        false
    }

    /// Handle a blur event. Returns true if the flag changed.
    pub fn on_blur(&mut self) -> bool {
        if self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }
}
