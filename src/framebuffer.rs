//! Concrete raw-buffer-backed pixel surface.
//!
//! [`Framebuffer`] stores RGBA pixels in a stride-padded byte buffer and
//! implements [`Surface`] including the raw-buffer capability, so clearing
//! it takes the row-copy fast path. It is the reference surface used by
//! the crate's tests and benches; a real application may instead bind the
//! drawing context to its own windowing-layer surface.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::surface::{ChannelOrder, RawPixelsMut, Surface};

/// Row alignment in bytes. Keeping rows cache-line aligned also means the
/// stride usually differs from `width * 4`, so stride handling bugs show
/// up immediately in tests.
const ROW_ALIGNMENT: usize = 64;

/// A pixel buffer with RGBA storage and padded row stride.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel, rows at
    /// `stride`-byte intervals.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterlite::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let size = stride * (height as usize);

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice, without the padding bytes.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Get the color at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }
}

impl Surface for Framebuffer {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if self.bounds().contains(x, y) {
            self.set_pixel(x as u32, y as u32, color);
        }
    }

    fn raw_pixels_mut(&mut self) -> Option<RawPixelsMut<'_>> {
        Some(RawPixelsMut {
            bytes: &mut self.pixels,
            width: self.width,
            height: self.height,
            stride: self.stride,
            order: ChannelOrder::Rgba,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        // Stride should be >= width * 4
        assert!(fb.stride() >= 400);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(10, 0, Rgba::RED);
        fb.set_pixel(0, 10, Rgba::RED);
        Surface::set(&mut fb, -1, 5, Rgba::RED);
        Surface::set(&mut fb, 5, -1, Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::TRANSPARENT));
            }
        }
    }

    #[test]
    fn test_bounds() {
        let fb = Framebuffer::new(7, 3).unwrap();
        assert_eq!(fb.bounds(), Rect::new(0, 0, 7, 3));
    }

    #[test]
    fn test_row_access() {
        let mut fb = Framebuffer::new(10, 5).unwrap();
        fb.set_pixel(5, 2, Rgba::RED);

        let row = fb.row(2).unwrap();
        assert_eq!(row.len(), 40);
        assert_eq!(&row[20..24], &[255, 0, 0, 255]);
        assert!(fb.row(5).is_none());
    }

    #[test]
    fn test_raw_pixels_stride() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        let raw = fb.raw_pixels_mut().unwrap();
        assert_eq!(raw.width, 3);
        assert_eq!(raw.height, 2);
        assert_eq!(raw.order, ChannelOrder::Rgba);
        // Padded stride: 12 bytes of pixels rounded up to the alignment
        assert!(raw.stride >= 12);
        assert!(raw.bytes.len() >= raw.stride * 2);
    }
}
