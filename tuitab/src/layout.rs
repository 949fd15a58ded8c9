/// A cell rectangle in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the last column, saturating at `u16::MAX`.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row, saturating at `u16::MAX`.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub const fn contains_rect(&self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_saturate() {
        let rect = Rect::new(u16::MAX - 2, u16::MAX, 10, 1);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(10, 0, 20, 1);
        assert!(outer.contains_rect(Rect::new(10, 0, 20, 1)));
        assert!(outer.contains_rect(Rect::new(15, 0, 5, 1)));
        assert!(!outer.contains_rect(Rect::new(5, 0, 10, 1)));
        assert!(!outer.contains_rect(Rect::new(25, 0, 10, 1)));
    }
}
