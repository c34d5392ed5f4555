//! The drawing context: color state plus primitive operations.
//!
//! A [`DrawContext`] borrows one [`Surface`] and draws on it with a
//! current color. Operations are immediate and synchronous; nothing is
//! buffered. None of them can fail: degenerate inputs (inverted ranges,
//! non-positive radius, sub-2x2 rectangles) draw nothing or the minimal
//! sensible shape.
//!
//! Coordinates are integer pixel positions. Bounds checking belongs to
//! the surface: primitives never pre-clip, they hand every pixel to
//! [`Surface::set`] which ignores out-of-bounds coordinates.

use crate::clear::{row_copy_clear, ClearMode};
use crate::color::Rgba;
use crate::font::FontRenderer;
use crate::surface::Surface;

/// Drawing context bound to one surface.
///
/// Created once per surface and reused across frames; the caller redraws
/// from scratch every frame, typically `set_color` + [`DrawContext::clear`]
/// followed by a sequence of primitive calls.
pub struct DrawContext<'a> {
    /// The surface being drawn on. Non-owning; the caller keeps it alive.
    surface: &'a mut dyn Surface,
    /// The drawing color used by every primitive.
    color: Rgba,
    /// Clear strategy, chosen once at construction.
    clear_mode: ClearMode,
    /// Glyph renderer consumed by `draw_string`, if one is configured.
    font: Option<&'a dyn FontRenderer>,
}

impl<'a> DrawContext<'a> {
    /// Create a context with opaque black as the drawing color.
    ///
    /// The clear strategy is detected from the surface's capabilities:
    /// raw-buffer-backed surfaces get the row-copy fast path, everything
    /// else the generic per-pixel clear.
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        let clear_mode = ClearMode::detect(surface);
        Self::with_clear_mode(surface, clear_mode)
    }

    /// Create a context with an explicitly chosen clear strategy.
    pub fn with_clear_mode(surface: &'a mut dyn Surface, clear_mode: ClearMode) -> Self {
        Self {
            surface,
            color: Rgba::BLACK,
            clear_mode,
            font: None,
        }
    }

    /// Attach a glyph renderer for [`DrawContext::draw_string`].
    #[must_use]
    pub fn with_font(mut self, font: &'a dyn FontRenderer) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the drawing color.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// The current drawing color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// The clear strategy in use.
    #[must_use]
    pub fn clear_mode(&self) -> ClearMode {
        self.clear_mode
    }

    /// Fill the entire surface bounds with the current color.
    ///
    /// In [`ClearMode::RowCopy`] the surface's raw buffer is filled by row
    /// copy; if the surface declines to produce one, or in
    /// [`ClearMode::PerPixel`], every pixel in bounds is set individually.
    /// Both paths produce identical pixels.
    pub fn clear(&mut self) {
        if self.clear_mode == ClearMode::RowCopy {
            if let Some(raw) = self.surface.raw_pixels_mut() {
                row_copy_clear(raw, self.color);
                return;
            }
        }

        let bounds = self.surface.bounds();
        for y in bounds.y..bounds.bottom() {
            for x in bounds.x..bounds.right() {
                self.surface.set(x, y, self.color);
            }
        }
    }

    /// Draw a point.
    pub fn point(&mut self, x: i32, y: i32) {
        self.surface.set(x, y, self.color);
    }

    /// Draw a horizontal line from `x1` to `x2` inclusive.
    ///
    /// An inverted range (`x1 > x2`) draws nothing.
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1..=x2 {
            self.surface.set(x, y, self.color);
        }
    }

    /// Draw a vertical line from `y1` to `y2` inclusive.
    ///
    /// An inverted range (`y1 > y2`) draws nothing.
    pub fn vline(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1..=y2 {
            self.surface.set(x, y, self.color);
        }
    }

    /// Draw the border of an axis-aligned rectangle anchored at `(x1, y1)`.
    ///
    /// The horizontal edges cover the corners; the vertical edges span
    /// only the interior rows so no corner pixel is set twice. A width or
    /// height of 1 collapses the border to a single line; non-positive
    /// sizes draw nothing.
    pub fn rectangle(&mut self, x1: i32, y1: i32, width: i32, height: i32) {
        if width < 1 || height < 1 {
            return;
        }
        let (x2, y2) = (x1 + width - 1, y1 + height - 1);
        self.hline(x1, x2, y1);
        self.hline(x1, x2, y2);
        self.vline(y1 + 1, y2 - 1, x1);
        self.vline(y1 + 1, y2 - 1, x2);
    }

    /// Draw a filled circle using the midpoint circle algorithm.
    ///
    /// Walks one quarter-arc and mirrors each step into a pair of
    /// horizontal spans above and below the center, so the disc is
    /// symmetric across both axes and each row is filled at most once.
    /// A non-positive radius draws nothing.
    ///
    /// <https://en.wikipedia.org/wiki/Midpoint_circle_algorithm>
    pub fn fill_circle(&mut self, x0: i32, y0: i32, rad: i32) {
        let (mut x, mut y, mut err) = (rad, 0, 0);
        while x > 0 {
            if err <= 0 {
                if y == 0 {
                    // The mirrored spans coincide on the center row.
                    self.hline(x0 - x, x0 + x, y0);
                } else {
                    self.hline(x0 - x, x0 + x, y0 - y);
                    self.hline(x0 - x, x0 + x, y0 + y);
                }
                y += 1;
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
    }

    /// Draw a line using Bresenham's line algorithm.
    ///
    /// Shallow lines (`|dy| < |dx|`) step along x, steep lines along y;
    /// endpoints are swapped so the stepping loop always advances in the
    /// positive major-axis direction, with the minor axis stepped by a
    /// direction indicator. The path is 8-connected and includes both
    /// endpoints; coincident endpoints yield a single pixel.
    ///
    /// <https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm>
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        if (y1 - y0).abs() < (x1 - x0).abs() {
            if x0 > x1 {
                self.line_low(x1, y1, x0, y0);
            } else {
                self.line_low(x0, y0, x1, y1);
            }
        } else if y0 > y1 {
            self.line_high(x1, y1, x0, y0);
        } else {
            self.line_high(x0, y0, x1, y1);
        }
    }

    /// Shallow-slope stepper: one pixel per x, `x0 <= x1`.
    fn line_low(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = x1 - x0;
        let (mut dy, mut yi) = (y1 - y0, 1);
        if dy < 0 {
            yi = -1;
            dy = -dy;
        }

        let mut d = 2 * dy - dx;
        let mut y = y0;
        for x in x0..=x1 {
            self.point(x, y);
            if d > 0 {
                y += yi;
                d -= 2 * dx;
            }
            d += 2 * dy;
        }
    }

    /// Steep-slope stepper: one pixel per y, `y0 <= y1`.
    fn line_high(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dy = y1 - y0;
        let (mut dx, mut xi) = (x1 - x0, 1);
        if dx < 0 {
            xi = -1;
            dx = -dx;
        }

        let mut d = 2 * dx - dy;
        let mut x = x0;
        for y in y0..=y1 {
            self.point(x, y);
            if d > 0 {
                x += xi;
                d -= 2 * dy;
            }
            d += 2 * dx;
        }
    }

    /// Draw a string in the current color.
    ///
    /// `y` is the text baseline (the bottom line of the glyphs); glyphs
    /// run left to right from `x`. Rasterization is delegated to the
    /// configured [`FontRenderer`]; a context without one draws nothing.
    /// The current color is never altered.
    pub fn draw_string(&mut self, text: &str, x: i32, y: i32) {
        if let Some(font) = self.font {
            font.draw_text(self.surface, self.color, x, y, text);
        }
    }
}
