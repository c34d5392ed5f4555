//! The glyph-rendering capability consumed by [`DrawContext::draw_string`].
//!
//! Glyph rasterization is not part of this crate; a windowing or font
//! layer supplies an implementation and the context merely forwards the
//! string, the baseline position, and its current color.
//!
//! [`DrawContext::draw_string`]: crate::context::DrawContext::draw_string

use crate::color::Rgba;
use crate::surface::Surface;

/// Renders a string's glyphs onto a surface.
pub trait FontRenderer {
    /// Draw `text` in `color`, left to right starting at `x`, with `y` as
    /// the glyph baseline (the bottom line of the text).
    fn draw_text(&self, surface: &mut dyn Surface, color: Rgba, x: i32, y: i32, text: &str);
}
