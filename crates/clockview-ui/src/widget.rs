use anyhow::Result;

use clockview_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// Contract between a widget and the host framework that embeds it.
///
/// The host owns layout, visibility and the real drawing backend; the widget
/// answers size queries, records primitives into a [`Painter`], and reacts to
/// being shown or hidden.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: the host may call it several times per layout.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// The widget became visible (attached to a window, scrolled into view, ...).
    fn on_attach(&mut self) -> Result<()> {
        Ok(())
    }

    /// The widget is no longer visible; release timers and other activity.
    fn on_detach(&mut self) {}
}
