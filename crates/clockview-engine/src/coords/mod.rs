//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles handed to clock geometry are in degrees, clockwise, with 0° at 12 o'clock.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
