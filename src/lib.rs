//! # rasterlite
//!
//! A minimal 2D software rasterizer: pixel-level drawing primitives over
//! an abstract, mutable pixel surface.
//!
//! The crate is built around three pieces:
//!
//! - [`Surface`](surface::Surface) — the pixel-grid capability a caller
//!   binds the rasterizer to: bounds query, single-pixel set, and an
//!   optional raw linear buffer for bulk operations.
//! - [`DrawContext`](context::DrawContext) — the drawing context: one
//!   current color plus the primitive operations (point, horizontal /
//!   vertical / Bresenham lines, rectangle outline, midpoint-circle fill,
//!   text baseline placement).
//! - [`ClearMode`](clear::ClearMode) — the full-surface clear strategy,
//!   picked once per context: a generic per-pixel fill, or a row-copy
//!   bulk fill when the surface exposes its raw buffer.
//!
//! A ready-made raw-buffer-backed surface is provided as
//! [`Framebuffer`](framebuffer::Framebuffer); window-system surfaces plug
//! in by implementing `Surface` themselves.
//!
//! ## Quick start
//!
//! ```
//! use rasterlite::prelude::*;
//!
//! let mut fb = Framebuffer::new(800, 550)?;
//! let mut ctx = DrawContext::new(&mut fb);
//!
//! // Once per frame: wipe, then repaint everything.
//! ctx.set_color(Rgba::BLACK);
//! ctx.clear();
//!
//! ctx.set_color(Rgba::rgb(200, 80, 0));
//! ctx.fill_circle(400, 275, 40);
//! ctx.rectangle(0, 0, 800, 550);
//! ctx.draw_line(0, 0, 799, 549);
//! # Ok::<(), rasterlite::Error>(())
//! ```
//!
//! Drawing is immediate, single-threaded, and infallible: degenerate
//! inputs (inverted ranges, non-positive radii) draw nothing rather than
//! erroring, and out-of-bounds pixels are clipped by the surface.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

/// Color types.
pub mod color;

/// Integer pixel-space geometry.
pub mod geometry;

/// The abstract pixel-surface capability.
pub mod surface;

/// Concrete raw-buffer-backed pixel surface.
pub mod framebuffer;

/// Glyph-rendering capability consumed by `draw_string`.
pub mod font;

/// The drawing context and its primitives.
pub mod context;

/// Full-surface clear strategies.
pub mod clear;

/// Error types.
pub mod error;

pub use error::{Error, Result};

/// Commonly used types for convenient imports.
///
/// ```
/// use rasterlite::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clear::ClearMode;
    pub use crate::color::Rgba;
    pub use crate::context::DrawContext;
    pub use crate::error::{Error, Result};
    pub use crate::font::FontRenderer;
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Rect;
    pub use crate::surface::{ChannelOrder, RawPixelsMut, Surface};
}
