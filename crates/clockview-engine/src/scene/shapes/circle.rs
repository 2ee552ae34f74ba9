use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Outlined circle payload.
///
/// The stroke is centered on the circle boundary, so it extends `width / 2`
/// on both sides of `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records an outline-only circle.
    #[inline]
    pub fn push_stroked_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, stroke }));
    }
}
