use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a line segment from `start` to `end`.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Line(LineCmd { start, end, stroke }));
    }
}
