use clockview_engine::coords::Vec2;
use clockview_engine::paint::{Color, Stroke};
use clockview_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a small primitive API. Every call lands
/// one z-step above the previous one, so paint order equals call order.
/// Coordinates are translated by `origin`, letting widgets draw in their own
/// local space.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    origin: Vec2,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, origin: Vec2::zero(), z: 0 }
    }

    /// Runs `f` with the local `(0, 0)` moved to `offset` in the current space.
    pub fn with_offset<R>(&mut self, offset: Vec2, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.origin;
        self.origin = saved + offset;
        let out = f(self);
        self.origin = saved;
        out
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Circle outline; the stroke is centered on `radius`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_stroked_circle(z, self.origin + center, radius, stroke);
    }

    /// Straight line segment.
    pub fn line(&mut self, start: Vec2, end: Vec2, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_line(z, self.origin + start, self.origin + end, stroke);
    }

    /// Text run whose baseline is horizontally centered on `anchor`.
    pub fn centered_text(
        &mut self,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_centered_text(z, text, size, color, self.origin + anchor);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
