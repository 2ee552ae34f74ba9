//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke description for outlined shapes and lines
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Stroke applied along a line or the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
