//! Presentation surfaces: what a tab renders through.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::{Orientation, WidthMode};
use crate::layout::Rect;
use crate::scroll::{ScrollIntoViewOptions, Viewport};
use crate::tab::Content;

/// Accessibility role exposed by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tab,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tab => "tab",
        }
    }
}

/// Props shared with the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SharedStyleProps {
    pub disabled: bool,
    pub active: bool,
    pub orientation: Orientation,
    pub width_mode: WidthMode,
}

/// Everything a tab hands its surface on each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceProps {
    pub id: String,
    pub role: Role,
    /// -1 takes the tab out of sequential keyboard navigation.
    pub tab_index: i8,
    pub aria_selected: bool,
    /// `Some(true)` when disabled, otherwise absent.
    pub aria_disabled: Option<bool>,
    pub is_focus_visible: bool,
    pub style: SharedStyleProps,
    pub title: String,
    /// Caller attributes from the surface override.
    pub attrs: BTreeMap<String, String>,
}

impl SurfaceProps {
    /// Look up an attribute by its markup name, as assistive technology
    /// or a test harness would see it. Caller attributes shadow the
    /// built-in ones.
    pub fn attribute(&self, name: &str) -> Option<String> {
        if let Some(value) = self.attrs.get(name) {
            return Some(value.clone());
        }
        match name {
            "id" => Some(self.id.clone()),
            "role" => Some(self.role.as_str().to_string()),
            "tabindex" => Some(self.tab_index.to_string()),
            "aria-selected" => Some(self.aria_selected.to_string()),
            "aria-disabled" => self.aria_disabled.map(|d| d.to_string()),
            "title" if !self.title.is_empty() => Some(self.title.clone()),
            _ => None,
        }
    }
}

/// Where the owning tab-list placed the tab.
#[derive(Debug, Clone)]
pub struct Placement {
    /// The scrolled strip the tab sits in.
    pub viewport: Rc<RefCell<Viewport>>,
    /// The tab's slot, in the strip's content coordinates.
    pub rect: Rect,
}

impl Placement {
    pub fn new(viewport: Rc<RefCell<Viewport>>, rect: Rect) -> Self {
        Self { viewport, rect }
    }
}

/// Optional surface capability: adjusting the viewport to reveal itself.
pub trait ScrollIntoView {
    fn scroll_into_view(&mut self, options: ScrollIntoViewOptions);
}

/// The rendering unit a tab delegates to.
pub trait Surface {
    fn render(&mut self, props: &SurfaceProps, children: &Content);

    /// Receive the slot assigned by the tab-list, or `None` once the
    /// tab-list stops placing the tab.
    fn place(&mut self, _placement: Option<&Placement>) {}

    /// The scroll capability, if this surface has one.
    fn scroller(&mut self) -> Option<&mut dyn ScrollIntoView> {
        None
    }

    /// Last rendered output, for surfaces that keep one.
    fn rendered(&self) -> Option<&RenderedTab> {
        None
    }
}

/// Output of [`StyledTab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTab {
    pub props: SurfaceProps,
    /// The label cell, padded to the tab's width.
    pub line: String,
}

impl RenderedTab {
    /// Display width of the rendered line in terminal cells.
    pub fn width(&self) -> usize {
        self.line.width()
    }
}

/// Default surface: renders the tab as a single padded text cell.
#[derive(Debug, Default)]
pub struct StyledTab {
    placement: Option<Placement>,
    rendered: Option<RenderedTab>,
}

impl StyledTab {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for StyledTab {
    fn render(&mut self, props: &SurfaceProps, children: &Content) {
        let label = match children {
            Content::Text(text) if props.title.is_empty() => text.as_str(),
            _ => props.title.as_str(),
        };
        let slot = match props.style.width_mode {
            WidthMode::Auto => None,
            WidthMode::Equal | WidthMode::Fill => {
                self.placement.as_ref().map(|p| usize::from(p.rect.width))
            }
        };
        let line = pad_label(label, slot);
        log::trace!("[surface] render {} as {:?}", props.id, line);
        self.rendered = Some(RenderedTab {
            props: props.clone(),
            line,
        });
    }

    fn place(&mut self, placement: Option<&Placement>) {
        self.placement = placement.cloned();
    }

    fn scroller(&mut self) -> Option<&mut dyn ScrollIntoView> {
        if self.placement.is_some() {
            Some(self as &mut dyn ScrollIntoView)
        } else {
            None
        }
    }

    fn rendered(&self) -> Option<&RenderedTab> {
        self.rendered.as_ref()
    }
}

impl ScrollIntoView for StyledTab {
    fn scroll_into_view(&mut self, options: ScrollIntoViewOptions) {
        if let Some(placement) = &self.placement {
            placement
                .viewport
                .borrow_mut()
                .scroll_into_view(placement.rect, options);
        }
    }
}

/// Pad `label` with one cell either side, or center it in a slot of
/// `slot` cells, truncating when it does not fit.
fn pad_label(label: &str, slot: Option<usize>) -> String {
    let Some(slot) = slot else {
        return format!(" {label} ");
    };

    let mut fitted = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > slot {
            break;
        }
        fitted.push(c);
        used += w;
    }

    let spare = slot - used;
    let left = spare / 2;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(spare - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_label_auto() {
        assert_eq!(pad_label("Logs", None), " Logs ");
    }

    #[test]
    fn test_pad_label_slot() {
        assert_eq!(pad_label("Logs", Some(8)), "  Logs  ");
        assert_eq!(pad_label("Logs", Some(7)), " Logs  ");
        assert_eq!(pad_label("Overview", Some(4)), "Over");
    }

    #[test]
    fn test_pad_label_wide_chars() {
        // Each CJK character is two cells wide
        let line = pad_label("日本", Some(6));
        assert_eq!(line.width(), 6);
        assert_eq!(line, " 日本 ");
        assert_eq!(pad_label("日本語", Some(5)), "日本 ");
    }
}
