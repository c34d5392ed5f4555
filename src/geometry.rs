//! Integer pixel-space geometry.

/// An axis-aligned rectangle in pixel coordinates.
///
/// `(x, y)` is the top-left corner; `width` and `height` are in pixels.
/// This is the shape returned by a surface's bounds query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottommost row.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check whether a pixel coordinate lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 9));
        assert!(!rect.contains(10, 9));
        assert!(!rect.contains(-1, 5));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert_eq!(rect.right(), 6);
        assert_eq!(rect.bottom(), 8);
    }

    #[test]
    fn test_offset_rect_contains() {
        let rect = Rect::new(-2, 4, 3, 2);
        assert!(rect.contains(-2, 4));
        assert!(rect.contains(0, 5));
        assert!(!rect.contains(1, 5));
        assert!(!rect.contains(0, 6));
    }
}
