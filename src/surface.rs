//! The abstract pixel-surface capability.
//!
//! A [`Surface`] is a rectangular grid of addressable pixels: it answers a
//! bounds query and sets single pixels. A surface backed by a raw linear
//! pixel buffer can additionally expose that buffer through
//! [`Surface::raw_pixels_mut`], which lets the clear fast path replace
//! per-pixel calls with a row copy. Opaque surfaces simply return `None`
//! and every operation goes through [`Surface::set`].

use crate::color::Rgba;
use crate::geometry::Rect;

/// Channel order of a raw pixel buffer, 4 bytes per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Bytes laid out as `[r, g, b, a]`.
    Rgba,
    /// Bytes laid out as `[b, g, r, a]` (X11-style buffers).
    Bgra,
}

impl ChannelOrder {
    /// Pack a color into this order's native byte layout.
    #[must_use]
    pub const fn pack(self, color: Rgba) -> [u8; 4] {
        match self {
            Self::Rgba => [color.r, color.g, color.b, color.a],
            Self::Bgra => [color.b, color.g, color.r, color.a],
        }
    }
}

/// Mutable view of a surface's raw linear pixel buffer.
///
/// Rows start at `stride`-byte intervals; `stride` may exceed
/// `width * 4` when rows carry alignment padding. Bulk operations must
/// step by `stride`, never by width.
#[derive(Debug)]
pub struct RawPixelsMut<'a> {
    /// The pixel bytes, covering at least `stride * height` bytes.
    pub bytes: &'a mut [u8],
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row pitch in bytes.
    pub stride: usize,
    /// Channel order of each 4-byte pixel.
    pub order: ChannelOrder,
}

/// A mutable grid of pixels that primitives draw onto.
///
/// Out-of-bounds `set` calls are silently ignored; callers never
/// pre-check coordinates.
pub trait Surface {
    /// The surface's bounds rectangle.
    fn bounds(&self) -> Rect;

    /// Set one pixel. Coordinates outside [`Surface::bounds`] are ignored.
    fn set(&mut self, x: i32, y: i32, color: Rgba);

    /// Expose the raw linear pixel buffer, if this surface has one.
    ///
    /// The default declines; only surfaces whose storage really is a
    /// 4-byte-per-pixel linear buffer should override this.
    fn raw_pixels_mut(&mut self) -> Option<RawPixelsMut<'_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgba() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(ChannelOrder::Rgba.pack(c), [1, 2, 3, 4]);
    }

    #[test]
    fn test_pack_bgra() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(ChannelOrder::Bgra.pack(c), [3, 2, 1, 4]);
    }
}
