use clockview_engine::coords::Vec2;
use clockview_engine::paint::{Color, Stroke};
use clockview_engine::time::TimeOfDay;

use crate::painter::Painter;

use super::geometry::{
    hand_angle_degrees, hand_endpoint, hand_tail, numeral_label, numeral_position, HandKind,
    DEFAULT_NUMERAL_INSET, NUMERAL_COUNT,
};
use super::ClockStyle;

/// Outline of the clock face.
#[derive(Debug, Clone, PartialEq)]
pub struct DialCircle {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Stroke,
}

/// One hand, from its counterweight tail through the center to its tip.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSegment {
    pub kind: HandKind,
    pub angle_degrees: f32,
    pub start: Vec2,
    pub end: Vec2,
    pub stroke: Stroke,
}

/// One hour marker. `label` is empty when the glyph lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub struct NumeralGlyph {
    pub index: usize,
    pub position: Vec2,
    pub label: &'static str,
}

/// Declarative description of everything drawn for one tick.
///
/// Rebuilt from scratch on every tick; identical `(time, style)` input gives an
/// identical frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    pub time: TimeOfDay,
    pub dial: DialCircle,
    /// Hour, minute, second, in paint order.
    pub hands: [HandSegment; 3],
    pub numerals: [NumeralGlyph; NUMERAL_COUNT],
    pub numeral_color: Color,
    pub numeral_size: f32,
}

/// Builds the frame for a clock whose bounds start at the local origin, i.e.
/// centered at `(radius, radius)`.
pub fn build_frame(time: TimeOfDay, style: &ClockStyle) -> ClockFrame {
    let r = style.radius();
    build_frame_at(time, style, Vec2::splat(r))
}

/// Builds the frame around an explicit center.
pub fn build_frame_at(time: TimeOfDay, style: &ClockStyle, center: Vec2) -> ClockFrame {
    let radius = style.radius();
    let numerals = style.numerals();

    let hand = |kind: HandKind, stroke: Stroke| {
        let angle = hand_angle_degrees(kind, time);
        HandSegment {
            kind,
            angle_degrees: angle,
            start: hand_tail(angle, center),
            end: hand_endpoint(angle, radius, kind.length_fraction(), center),
            stroke,
        }
    };

    ClockFrame {
        time,
        dial: DialCircle { center, radius: style.dial_radius(), stroke: style.dial() },
        hands: [
            hand(HandKind::Hour, style.hour_hand()),
            hand(HandKind::Minute, style.minute_hand()),
            hand(HandKind::Second, style.second_hand()),
        ],
        numerals: std::array::from_fn(|index| NumeralGlyph {
            index,
            position: numeral_position(index, radius, center, DEFAULT_NUMERAL_INSET),
            label: numeral_label(index, numerals.set).unwrap_or_else(|err| {
                log::error!("{err}; drawing a blank marker");
                ""
            }),
        }),
        numeral_color: numerals.color,
        numeral_size: numerals.size,
    }
}

impl ClockFrame {
    pub fn hand(&self, kind: HandKind) -> &HandSegment {
        match kind {
            HandKind::Hour => &self.hands[0],
            HandKind::Minute => &self.hands[1],
            HandKind::Second => &self.hands[2],
        }
    }

    /// Baseline anchor for a numeral: text is centered horizontally and the
    /// baseline drops a third of the font size so the glyph sits on its point.
    pub fn numeral_baseline(&self, glyph: &NumeralGlyph) -> Vec2 {
        glyph.position + Vec2::new(0.0, self.numeral_size / 3.0)
    }

    /// Emits the frame: one circle, the numerals, then the three hands.
    ///
    /// Blank markers are skipped.
    pub fn paint(&self, painter: &mut Painter) {
        painter.stroke_circle(self.dial.center, self.dial.radius, self.dial.stroke);

        for glyph in self.numerals.iter().filter(|g| !g.label.is_empty()) {
            painter.centered_text(
                glyph.label,
                self.numeral_size,
                self.numeral_color,
                self.numeral_baseline(glyph),
            );
        }

        for hand in &self.hands {
            painter.line(hand.start, hand.end, hand.stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockview_engine::scene::{DrawCmd, DrawList};

    use crate::clock::NumeralSet;

    fn t(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn identical_input_gives_identical_frames() {
        let style = ClockStyle::default();
        let a = build_frame(t(7, 41, 13), &style);
        let b = build_frame(t(7, 41, 13), &style);
        assert_eq!(a, b);

        let bits = |f: &ClockFrame| -> Vec<u32> {
            f.hands
                .iter()
                .flat_map(|h| [h.start.x, h.start.y, h.end.x, h.end.y])
                .map(f32::to_bits)
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn dial_is_inset_by_half_the_stroke() {
        let frame = build_frame(t(0, 0, 0), &ClockStyle::default());
        assert_eq!(frame.dial.center, Vec2::new(200.0, 200.0));
        assert_eq!(frame.dial.radius, 194.0);
        assert_eq!(frame.dial.stroke, Stroke::new(12.0, Color::BLACK));
    }

    #[test]
    fn three_oclock_hand_angles() {
        let frame = build_frame(t(3, 0, 0), &ClockStyle::default());
        assert_eq!(frame.hand(HandKind::Hour).angle_degrees, 90.0);
        assert_eq!(frame.hand(HandKind::Minute).angle_degrees, 0.0);
        assert_eq!(frame.hand(HandKind::Second).angle_degrees, 0.0);

        let hour = frame.hand(HandKind::Hour);
        assert!((hour.end.x - 300.0).abs() < 1e-3);
        assert!((hour.end.y - 200.0).abs() < 1e-3);
        assert!((hour.start.x - 180.0).abs() < 1e-3);
    }

    #[test]
    fn hands_carry_their_own_strokes() {
        let style = ClockStyle::builder()
            .second_hand_color(Color::BLACK)
            .second_hand_width(1.0)
            .resolve()
            .unwrap();
        let frame = build_frame(t(0, 0, 0), &style);
        assert_eq!(frame.hand(HandKind::Hour).stroke, Stroke::new(8.0, Color::RED));
        assert_eq!(frame.hand(HandKind::Minute).stroke, Stroke::new(4.5, Color::RED));
        assert_eq!(frame.hand(HandKind::Second).stroke, Stroke::new(1.0, Color::BLACK));
    }

    #[test]
    fn numerals_follow_the_chosen_set() {
        let roman = ClockStyle::builder().numeral_set(NumeralSet::Roman).resolve().unwrap();
        let frame = build_frame(t(0, 0, 0), &roman);
        let labels: Vec<_> = frame.numerals.iter().map(|g| g.label).collect();
        assert_eq!(labels, NumeralSet::Roman.labels());
        assert!((frame.numerals[9].position.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn explicit_center_moves_everything() {
        let style = ClockStyle::default();
        let a = build_frame(t(1, 2, 3), &style);
        let b = build_frame_at(t(1, 2, 3), &style, Vec2::new(210.0, 190.0));
        assert_eq!(b.dial.center, Vec2::new(210.0, 190.0));
        assert!((b.numerals[0].position.x - a.numerals[0].position.x - 10.0).abs() < 1e-3);
        assert!((b.hands[2].end.y - a.hands[2].end.y + 10.0).abs() < 1e-3);
    }

    #[test]
    fn paint_emits_circle_twelve_texts_three_lines() {
        let frame = build_frame(t(10, 10, 10), &ClockStyle::default());
        let mut list = DrawList::new();
        frame.paint(&mut Painter::new(&mut list));

        assert_eq!(list.shape_counts(), (1, 3, 12));
        assert!(matches!(list.items()[0].cmd, DrawCmd::Circle(_)));
        match &list.items()[1].cmd {
            DrawCmd::Text(text) => {
                assert_eq!(text.text, "3");
                assert_eq!(text.anchor.y, 200.0 + 20.0 / 3.0);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn blank_markers_are_skipped() {
        let mut frame = build_frame(t(0, 0, 0), &ClockStyle::default());
        frame.numerals[4].label = "";
        let mut list = DrawList::new();
        frame.paint(&mut Painter::new(&mut list));
        assert_eq!(list.shape_counts(), (1, 3, 11));
    }
}
