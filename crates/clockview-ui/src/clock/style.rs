use std::str::FromStr;

use clockview_engine::paint::{Color, Stroke};

use crate::constraints::Edges;

use super::ClockError;

pub const DEFAULT_RADIUS: f32 = 200.0;
pub const DEFAULT_DIAL_STROKE_WIDTH: f32 = 12.0;
pub const DEFAULT_HOUR_HAND_WIDTH: f32 = 8.0;
pub const DEFAULT_MINUTE_HAND_WIDTH: f32 = 4.5;
pub const DEFAULT_SECOND_HAND_WIDTH: f32 = 2.0;
/// Numeral font size in scale-independent pixels; hosts apply their density.
pub const DEFAULT_NUMERAL_SIZE: f32 = 20.0;

const ARABIC: [&str; 12] = ["3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "1", "2"];
const ROMAN: [&str; 12] = [
    "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "I", "II",
];

// ── NumeralSet ────────────────────────────────────────────────────────────

/// Glyph table used for the twelve hour markers.
///
/// Tables start at the 3 o'clock marker and run clockwise, matching the
/// placement order of [`numeral_position`](super::numeral_position).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum NumeralSet {
    #[default]
    Arabic,
    Roman,
}

impl NumeralSet {
    pub fn labels(self) -> &'static [&'static str; 12] {
        match self {
            NumeralSet::Arabic => &ARABIC,
            NumeralSet::Roman => &ROMAN,
        }
    }
}

impl FromStr for NumeralSet {
    type Err = ClockError;

    /// Accepts `arabic`/`roman` (any case) and the integer codes `0`/`1`
    /// used by attribute-based hosts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arabic" | "0" => Ok(NumeralSet::Arabic),
            "roman" | "1" => Ok(NumeralSet::Roman),
            other => Err(ClockError::config(
                "numeral_set",
                format!("expected `arabic` or `roman`, got `{other}`"),
            )),
        }
    }
}

// ── ClockStyle ────────────────────────────────────────────────────────────

/// Numeral appearance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NumeralStyle {
    pub set: NumeralSet,
    pub color: Color,
    pub size: f32,
}

/// Validated, immutable clock appearance.
///
/// Only obtainable through [`Default`] or [`ClockStyle::resolve`], so every
/// value satisfies: radius > 0, stroke widths ≥ 0, dial stroke ≤ diameter,
/// numeral size ≥ 0, padding ≥ 0, all finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    radius: f32,
    dial: Stroke,
    hour_hand: Stroke,
    minute_hand: Stroke,
    second_hand: Stroke,
    numerals: NumeralStyle,
    padding: Edges,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            dial: Stroke::new(DEFAULT_DIAL_STROKE_WIDTH, Color::BLACK),
            hour_hand: Stroke::new(DEFAULT_HOUR_HAND_WIDTH, Color::RED),
            minute_hand: Stroke::new(DEFAULT_MINUTE_HAND_WIDTH, Color::RED),
            second_hand: Stroke::new(DEFAULT_SECOND_HAND_WIDTH, Color::RED),
            numerals: NumeralStyle {
                set: NumeralSet::Arabic,
                color: Color::BLACK,
                size: DEFAULT_NUMERAL_SIZE,
            },
            padding: Edges::default(),
        }
    }
}

impl ClockStyle {
    /// Starts an empty set of overrides; see [`ClockStyleOverrides::resolve`].
    pub fn builder() -> ClockStyleOverrides {
        ClockStyleOverrides::default()
    }

    /// Merges `overrides` over the defaults and validates the result.
    pub fn resolve(overrides: &ClockStyleOverrides) -> Result<Self, ClockError> {
        let d = Self::default();
        let style = Self {
            radius: overrides.radius.unwrap_or(d.radius),
            dial: Stroke::new(
                overrides.dial_stroke_width.unwrap_or(d.dial.width),
                overrides.dial_color.unwrap_or(d.dial.color),
            ),
            hour_hand: Stroke::new(
                overrides.hour_hand_width.unwrap_or(d.hour_hand.width),
                overrides.hour_hand_color.unwrap_or(d.hour_hand.color),
            ),
            minute_hand: Stroke::new(
                overrides.minute_hand_width.unwrap_or(d.minute_hand.width),
                overrides.minute_hand_color.unwrap_or(d.minute_hand.color),
            ),
            second_hand: Stroke::new(
                overrides.second_hand_width.unwrap_or(d.second_hand.width),
                overrides.second_hand_color.unwrap_or(d.second_hand.color),
            ),
            numerals: NumeralStyle {
                set: overrides.numeral_set.unwrap_or(d.numerals.set),
                color: overrides.numeral_color.unwrap_or(d.numerals.color),
                size: overrides.numeral_size.unwrap_or(d.numerals.size),
            },
            padding: overrides.padding.unwrap_or(d.padding),
        };
        style.validate()?;
        Ok(style)
    }

    fn validate(&self) -> Result<(), ClockError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ClockError::config(
                "radius",
                format!("must be a positive number, got {}", self.radius),
            ));
        }

        let strokes = [
            ("dial_stroke_width", self.dial),
            ("hour_hand_width", self.hour_hand),
            ("minute_hand_width", self.minute_hand),
            ("second_hand_width", self.second_hand),
        ];
        for (option, stroke) in strokes {
            if !stroke.width.is_finite() || stroke.width < 0.0 {
                return Err(ClockError::config(
                    option,
                    format!("must be zero or positive, got {}", stroke.width),
                ));
            }
            if !stroke.color.is_finite() {
                return Err(ClockError::config(option, "color has non-finite channels"));
            }
        }

        // The dial stroke is centered on the boundary; past the diameter the
        // inner edge would cross the center.
        if self.dial.width > 2.0 * self.radius {
            return Err(ClockError::config(
                "dial_stroke_width",
                format!("{} exceeds the clock diameter {}", self.dial.width, 2.0 * self.radius),
            ));
        }

        if !self.numerals.size.is_finite() || self.numerals.size < 0.0 {
            return Err(ClockError::config(
                "numeral_size",
                format!("must be zero or positive, got {}", self.numerals.size),
            ));
        }

        if !self.padding.is_valid() {
            return Err(ClockError::config("padding", "insets must be finite and non-negative"));
        }

        Ok(())
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn dial(&self) -> Stroke {
        self.dial
    }

    #[inline]
    pub fn hour_hand(&self) -> Stroke {
        self.hour_hand
    }

    #[inline]
    pub fn minute_hand(&self) -> Stroke {
        self.minute_hand
    }

    #[inline]
    pub fn second_hand(&self) -> Stroke {
        self.second_hand
    }

    #[inline]
    pub fn numerals(&self) -> NumeralStyle {
        self.numerals
    }

    #[inline]
    pub fn padding(&self) -> Edges {
        self.padding
    }

    /// Radius of the dial circle: the stroke straddles `radius - width / 2`
    /// so its outer edge touches the clock bounds.
    #[inline]
    pub fn dial_radius(&self) -> f32 {
        self.radius - self.dial.width / 2.0
    }
}

// ── ClockStyleOverrides ───────────────────────────────────────────────────

/// Partial style: every unset option falls back to the default.
///
/// # Example
/// ```rust,ignore
/// let style = ClockStyle::builder()
///     .radius(120.0)
///     .numeral_set(NumeralSet::Roman)
///     .second_hand_color(Color::BLACK)
///     .resolve()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockStyleOverrides {
    pub radius: Option<f32>,
    pub dial_color: Option<Color>,
    pub dial_stroke_width: Option<f32>,
    pub hour_hand_color: Option<Color>,
    pub hour_hand_width: Option<f32>,
    pub minute_hand_color: Option<Color>,
    pub minute_hand_width: Option<f32>,
    pub second_hand_color: Option<Color>,
    pub second_hand_width: Option<f32>,
    pub numeral_set: Option<NumeralSet>,
    pub numeral_color: Option<Color>,
    pub numeral_size: Option<f32>,
    pub padding: Option<Edges>,
}

impl ClockStyleOverrides {
    pub fn radius(mut self, v: f32) -> Self { self.radius = Some(v); self }
    pub fn dial_color(mut self, v: Color) -> Self { self.dial_color = Some(v); self }
    pub fn dial_stroke_width(mut self, v: f32) -> Self { self.dial_stroke_width = Some(v); self }
    pub fn hour_hand_color(mut self, v: Color) -> Self { self.hour_hand_color = Some(v); self }
    pub fn hour_hand_width(mut self, v: f32) -> Self { self.hour_hand_width = Some(v); self }
    pub fn minute_hand_color(mut self, v: Color) -> Self { self.minute_hand_color = Some(v); self }
    pub fn minute_hand_width(mut self, v: f32) -> Self { self.minute_hand_width = Some(v); self }
    pub fn second_hand_color(mut self, v: Color) -> Self { self.second_hand_color = Some(v); self }
    pub fn second_hand_width(mut self, v: f32) -> Self { self.second_hand_width = Some(v); self }
    pub fn numeral_set(mut self, v: NumeralSet) -> Self { self.numeral_set = Some(v); self }
    pub fn numeral_color(mut self, v: Color) -> Self { self.numeral_color = Some(v); self }
    pub fn numeral_size(mut self, v: f32) -> Self { self.numeral_size = Some(v); self }
    pub fn padding(mut self, v: Edges) -> Self { self.padding = Some(v); self }

    /// Shorthand for [`ClockStyle::resolve`].
    pub fn resolve(&self) -> Result<ClockStyle, ClockError> {
        ClockStyle::resolve(self)
    }
}
