use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Text draw payload.
///
/// The run is horizontally centered on `anchor`; shaping and glyph
/// rasterisation are left to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Middle of the baseline, in logical pixels.
    pub anchor: Vec2,
}

impl DrawList {
    /// Records a text run horizontally centered on `anchor`.
    #[inline]
    pub fn push_centered_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), size, color, anchor }));
    }
}
