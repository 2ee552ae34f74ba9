//! Clockview engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers: geometry
//! primitives, colors, the recorded draw stream, and the wall-clock/tick plumbing.

pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
