//! Analog clock face.
//!
//! Layering, leaves first:
//! - `style`: validated, immutable appearance plus default merging
//! - `geometry`: pure hand/numeral math
//! - `frame`: the per-tick description of what to draw
//! - `view`: the widget that ties a time source and a ticker to frames

mod error;
mod frame;
mod geometry;
mod style;
mod view;

pub use error::ClockError;
pub use frame::{build_frame, build_frame_at, ClockFrame, DialCircle, HandSegment, NumeralGlyph};
pub use geometry::{
    hand_angle_degrees, hand_endpoint, hand_tail, numeral_label, numeral_position, HandKind,
    DEFAULT_NUMERAL_INSET, HAND_TAIL_LENGTH, NUMERAL_COUNT,
};
pub use style::{ClockStyle, ClockStyleOverrides, NumeralSet, NumeralStyle};
pub use view::{ClockView, InvalidateHook, LifecycleState};
