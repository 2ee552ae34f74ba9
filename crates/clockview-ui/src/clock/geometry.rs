//! Clock face geometry.
//!
//! Pure functions from a time of day and a radius to drawable positions.
//! Screen space is +Y down; hand angles are degrees clockwise from 12 o'clock.

use clockview_engine::coords::Vec2;
use clockview_engine::time::TimeOfDay;

use super::{ClockError, NumeralSet};

/// Number of hour markers on the dial.
pub const NUMERAL_COUNT: usize = 12;

/// Distance from the clock edge to the numeral centers.
pub const DEFAULT_NUMERAL_INSET: f32 = 70.0;

/// How far each hand extends past the center, opposite its tip.
pub const HAND_TAIL_LENGTH: f32 = 20.0;

/// Which hand an angle or segment belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Paint order: hour below minute below second.
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Tip distance from the center as a fraction of the clock radius.
    pub fn length_fraction(self) -> f32 {
        match self {
            HandKind::Hour => 0.5,
            HandKind::Minute => 0.7,
            HandKind::Second => 0.9,
        }
    }
}

/// Hand angle in degrees, clockwise from 12 o'clock.
///
/// Seconds and minutes step 6° per unit. The hour hand moves 30° per hour and
/// creeps 0.5° per minute, computed as `(60h + m) / 2` so it is exact in `f32`.
pub fn hand_angle_degrees(kind: HandKind, time: TimeOfDay) -> f32 {
    match kind {
        HandKind::Second => time.second() as f32 * 6.0,
        HandKind::Minute => time.minute() as f32 * 6.0,
        HandKind::Hour => (time.hour() * 60 + time.minute()) as f32 * 0.5,
    }
}

/// Point `length` away from `center` along a clockwise-from-12 angle.
///
/// Negative lengths point the opposite way.
#[inline]
fn point_along(angle_degrees: f32, length: f32, center: Vec2) -> Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Vec2::new(center.x + length * sin, center.y - length * cos)
}

/// Tip of a hand: `(0, -radius * length_fraction)` rotated clockwise by the angle.
pub fn hand_endpoint(angle_degrees: f32, radius: f32, length_fraction: f32, center: Vec2) -> Vec2 {
    point_along(angle_degrees, radius * length_fraction, center)
}

/// Counterweight end of a hand, [`HAND_TAIL_LENGTH`] past the center.
pub fn hand_tail(angle_degrees: f32, center: Vec2) -> Vec2 {
    point_along(angle_degrees, -HAND_TAIL_LENGTH, center)
}

/// Center of hour marker `index`.
///
/// Markers are measured from the 3 o'clock axis, 30° apart, clockwise, on a
/// circle of radius `radius - inset`. Index 0 is 3 o'clock and index 9 is 12.
pub fn numeral_position(index: usize, radius: f32, center: Vec2, inset: f32) -> Vec2 {
    let (sin, cos) = (index as f32 * 30.0).to_radians().sin_cos();
    let ring = radius - inset;
    Vec2::new(center.x + ring * cos, center.y + ring * sin)
}

/// Glyph for hour marker `index` in `set`.
pub fn numeral_label(index: usize, set: NumeralSet) -> Result<&'static str, ClockError> {
    set.labels().get(index).copied().ok_or(ClockError::Lookup { index })
}
