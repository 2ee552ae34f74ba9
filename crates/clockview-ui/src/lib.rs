//! Clockview UI: an analog clock widget on top of `clockview-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use clockview_ui::prelude::*;
//!
//! let style = ClockStyle::builder()
//!     .radius(150.0)
//!     .numeral_set(NumeralSet::Roman)
//!     .resolve()?;
//!
//! let mut clock = ClockView::new(style);
//! clock.on_invalidate(|| request_redraw());
//! clock.on_attach()?;
//!
//! // In the host's draw callback:
//! let mut draw_list = DrawList::new();
//! clock.paint(&mut Painter::new(&mut draw_list), bounds);
//! // Hand draw_list to the backend.
//! ```
//!
//! Hosts that only need the math can call [`clock::build_frame`] directly and
//! paint the returned [`clock::ClockFrame`] however they like.

pub mod clock;
pub mod constraints;
pub mod painter;
pub mod widget;

/// Everything a host needs to embed the clock.
pub mod prelude {
    pub use crate::clock::{
        build_frame, ClockError, ClockFrame, ClockStyle, ClockStyleOverrides, ClockView, HandKind,
        LifecycleState, NumeralSet,
    };
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::painter::Painter;
    pub use crate::widget::Widget;

    // Re-export the engine primitives everyone needs.
    pub use clockview_engine::coords::{Rect, Vec2};
    pub use clockview_engine::paint::{Color, Stroke};
    pub use clockview_engine::scene::DrawList;
    pub use clockview_engine::time::{
        FixedTimeSource, ManualTicker, SystemTimeSource, ThreadTicker, Ticker, TimeOfDay,
        TimeSource,
    };
}
