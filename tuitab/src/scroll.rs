//! Scroll-into-view requests and the viewport geometry that serves them.

use crate::layout::Rect;

/// Scroll offset of a viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset.
    #[default]
    Instant,
    /// Animate towards the target offset.
    Smooth,
}

/// Where the target lands along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollAlign {
    #[default]
    Start,
    Center,
    End,
    /// Scroll the minimum distance that makes the target visible.
    Nearest,
}

/// A scroll-into-view request. `block` is the vertical axis, `inline` the
/// horizontal one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlign,
    pub inline: ScrollAlign,
}

impl ScrollIntoViewOptions {
    /// Immediate jump aligning the start edges. Used when a tab mounts active.
    pub const fn instant_start() -> Self {
        Self {
            behavior: ScrollBehavior::Instant,
            block: ScrollAlign::Start,
            inline: ScrollAlign::Start,
        }
    }

    /// Animated reveal at the nearest edge. Used when a tab becomes active.
    pub const fn smooth_nearest() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlign::Nearest,
            inline: ScrollAlign::Nearest,
        }
    }
}

/// Request to issue when a tab mounts.
pub fn reveal_on_mount(active: bool) -> Option<ScrollIntoViewOptions> {
    active.then(ScrollIntoViewOptions::instant_start)
}

/// Request to issue when a mounted tab's `active` prop changes.
/// Only the inactive-to-active transition scrolls.
pub fn reveal_on_update(was_active: bool, active: bool) -> Option<ScrollIntoViewOptions> {
    (!was_active && active).then(ScrollIntoViewOptions::smooth_nearest)
}

/// A scrollable region, e.g. the strip a tab-list lays its tabs out in.
///
/// Target rectangles are in content coordinates. Offsets are clamped to the
/// content size, so set it before scrolling.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    offset: ScrollOffset,
    width: u16,
    height: u16,
    content_width: u16,
    content_height: u16,
    /// Target of an in-flight smooth scroll.
    pending: Option<ScrollOffset>,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the size of the scrolled content, clamping the offset to it.
    pub fn set_content_size(&mut self, width: u16, height: u16) {
        self.content_width = width;
        self.content_height = height;
        self.offset = self.clamp(self.offset);
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Visible area in content coordinates.
    pub fn visible(&self) -> Rect {
        Rect::new(self.offset.x, self.offset.y, self.width, self.height)
    }

    /// Whether `target` is fully inside the visible area.
    pub fn is_visible(&self, target: Rect) -> bool {
        self.visible().contains_rect(target)
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Scroll so that `target` becomes visible. Instant requests apply
    /// immediately; smooth requests are held until [`Viewport::settle`].
    /// Returns the offset the viewport is heading to.
    pub fn scroll_into_view(&mut self, target: Rect, options: ScrollIntoViewOptions) -> ScrollOffset {
        let x = align_axis(
            target.x,
            target.width,
            self.offset.x,
            self.width,
            options.inline,
        );
        let y = align_axis(
            target.y,
            target.height,
            self.offset.y,
            self.height,
            options.block,
        );
        let next = self.clamp(ScrollOffset::new(x, y));

        match options.behavior {
            ScrollBehavior::Instant => {
                self.pending = None;
                self.offset = next;
            }
            ScrollBehavior::Smooth => {
                self.pending = (next != self.offset).then_some(next);
            }
        }
        log::debug!(
            "[scroll] reveal {:?} with {:?} -> {:?} (current {:?})",
            target, options, next, self.offset
        );
        next
    }

    /// Finish an in-flight smooth scroll. Returns true if the offset changed.
    pub fn settle(&mut self) -> bool {
        match self.pending.take() {
            Some(target) if target != self.offset => {
                self.offset = target;
                true
            }
            _ => false,
        }
    }

    fn clamp(&self, offset: ScrollOffset) -> ScrollOffset {
        let max_x = self.content_width.saturating_sub(self.width);
        let max_y = self.content_height.saturating_sub(self.height);
        ScrollOffset::new(offset.x.min(max_x), offset.y.min(max_y))
    }
}

/// New viewport start along one axis.
fn align_axis(start: u16, len: u16, view_start: u16, view_len: u16, align: ScrollAlign) -> u16 {
    let end = u32::from(start) + u32::from(len);
    let view_end = u32::from(view_start) + u32::from(view_len);
    let aligned_end = end.saturating_sub(u32::from(view_len));

    let next = match align {
        ScrollAlign::Start => u32::from(start),
        ScrollAlign::End => aligned_end,
        ScrollAlign::Center => {
            (u32::from(start) + u32::from(len) / 2).saturating_sub(u32::from(view_len) / 2)
        }
        ScrollAlign::Nearest => {
            if start >= view_start && end <= view_end {
                u32::from(view_start)
            } else if start < view_start || len > view_len {
                u32::from(start)
            } else {
                aligned_end
            }
        }
    };
    u16::try_from(next).unwrap_or(u16::MAX)
}
