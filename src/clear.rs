//! Full-surface clear strategies.
//!
//! The generic clear sets every pixel in the surface bounds through
//! [`Surface::set`]. Surfaces that expose a raw linear buffer can be
//! cleared by filling the first row once and copying its bytes into every
//! other row, which is what the original per-platform clear hooks did.
//! The strategy is picked once when a context is built, not per frame,
//! and a [`ClearMode::RowCopy`] context still falls back to the generic
//! path if its surface declines to produce a raw view. Both paths write
//! exactly the bounds rectangle and are pixel-for-pixel identical.
//!
//! [`Surface::set`]: crate::surface::Surface::set

use crate::color::Rgba;
use crate::surface::{RawPixelsMut, Surface};

/// How a drawing context clears its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearMode {
    /// Set every pixel in bounds individually. Works on any surface.
    #[default]
    PerPixel,
    /// Fill the first raw row, then copy it to the remaining rows by
    /// stride. Requires the raw-buffer capability.
    RowCopy,
}

impl ClearMode {
    /// Pick the fastest mode the surface supports.
    pub fn detect(surface: &mut dyn Surface) -> Self {
        if surface.raw_pixels_mut().is_some() {
            Self::RowCopy
        } else {
            Self::PerPixel
        }
    }
}

/// Fill a raw pixel buffer with one color.
///
/// The first row is written pixel by pixel in the buffer's native channel
/// order; every following row is a byte copy of the first, placed at
/// `stride` intervals so row padding is skipped, not overwritten.
pub(crate) fn row_copy_clear(raw: RawPixelsMut<'_>, color: Rgba) {
    let row_bytes = (raw.width as usize) * 4;
    let native = raw.order.pack(color);

    for pixel in raw.bytes[..row_bytes].chunks_exact_mut(4) {
        pixel.copy_from_slice(&native);
    }

    for y in 1..raw.height as usize {
        raw.bytes.copy_within(..row_bytes, y * raw.stride);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ChannelOrder;

    fn raw(bytes: &mut [u8], width: u32, height: u32, stride: usize) -> RawPixelsMut<'_> {
        RawPixelsMut {
            bytes,
            width,
            height,
            stride,
            order: ChannelOrder::Bgra,
        }
    }

    #[test]
    fn test_row_copy_respects_stride_padding() {
        // 2x3 pixels, 4 padding bytes per row
        let mut bytes = vec![0xEE; 12 * 3];
        row_copy_clear(raw(&mut bytes, 2, 3, 12), Rgba::new(1, 2, 3, 4));

        for y in 0..3 {
            let row = &bytes[y * 12..y * 12 + 8];
            assert_eq!(row, &[3, 2, 1, 4, 3, 2, 1, 4], "row {y}");
            // Padding untouched
            assert_eq!(&bytes[y * 12 + 8..y * 12 + 12], &[0xEE; 4]);
        }
    }

    #[test]
    fn test_row_copy_single_row() {
        let mut bytes = vec![0; 8];
        row_copy_clear(raw(&mut bytes, 2, 1, 8), Rgba::WHITE);
        assert_eq!(bytes, [255; 8]);
    }

    #[test]
    fn test_detect_modes() {
        let mut fb = crate::framebuffer::Framebuffer::new(4, 4).unwrap();
        assert_eq!(ClearMode::detect(&mut fb), ClearMode::RowCopy);

        struct Opaque;
        impl Surface for Opaque {
            fn bounds(&self) -> crate::geometry::Rect {
                crate::geometry::Rect::new(0, 0, 1, 1)
            }
            fn set(&mut self, _x: i32, _y: i32, _color: Rgba) {}
        }
        assert_eq!(ClearMode::detect(&mut Opaque), ClearMode::PerPixel);
    }
}
