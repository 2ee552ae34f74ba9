use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{anyhow, Result};

use clockview_engine::coords::{Rect, Vec2};
use clockview_engine::time::{SystemTimeSource, ThreadTicker, Ticker, TimeSource};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

use super::{build_frame, ClockError, ClockFrame, ClockStyle, ClockStyleOverrides};

/// Host redraw request, called after every tick's frame is ready.
///
/// Runs on the ticker's thread; keep it short (post a message, set a flag).
pub type InvalidateHook = Arc<dyn Fn() + Send + Sync>;

/// Whether the clock is currently ticking.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LifecycleState {
    /// Constructed or detached; no ticks are scheduled.
    Inactive,
    /// Attached; the ticker rebuilds the frame every interval.
    Active,
}

/// Analog clock widget.
///
/// Owns an immutable [`ClockStyle`], a [`TimeSource`] and a [`Ticker`]. While
/// active, every tick samples the time, builds a fresh [`ClockFrame`], stores
/// it as the latest frame and calls the invalidate hook; the host then paints.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockView::new(ClockStyle::builder().radius(120.0).resolve()?);
/// clock.on_invalidate(move || { let _ = redraw_tx.send(()); });
/// clock.on_attach()?;
/// // on every redraw request:
/// clock.paint(&mut painter, bounds);
/// // when hidden:
/// clock.on_detach();
/// ```
pub struct ClockView<T: Ticker = ThreadTicker> {
    style: Arc<ClockStyle>,
    time_source: Arc<dyn TimeSource>,
    ticker: T,
    latest: Arc<Mutex<Option<ClockFrame>>>,
    invalidate: Arc<Mutex<Option<InvalidateHook>>>,
    state: LifecycleState,
}

impl ClockView<ThreadTicker> {
    /// Clock driven by the local wall clock and a one-second background ticker.
    pub fn new(style: ClockStyle) -> Self {
        Self::with_ticker(style, ThreadTicker::new())
    }

    /// Resolves `overrides` first; an invalid configuration yields no widget.
    pub fn from_overrides(overrides: &ClockStyleOverrides) -> Result<Self, ClockError> {
        Ok(Self::new(ClockStyle::resolve(overrides)?))
    }
}

impl<T: Ticker> ClockView<T> {
    pub fn with_ticker(style: ClockStyle, ticker: T) -> Self {
        Self {
            style: Arc::new(style),
            time_source: Arc::new(SystemTimeSource::new()),
            ticker,
            latest: Arc::new(Mutex::new(None)),
            invalidate: Arc::new(Mutex::new(None)),
            state: LifecycleState::Inactive,
        }
    }

    /// Replaces the wall clock, e.g. with a `FixedTimeSource`.
    pub fn with_time_source(mut self, source: Arc<dyn TimeSource>) -> Self {
        self.time_source = source;
        self
    }

    /// Registers the redraw hook, replacing any previous one.
    ///
    /// Takes effect from the next tick, also while the clock is active.
    pub fn on_invalidate(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        let hook: InvalidateHook = Arc::new(hook);
        *self.invalidate.lock().unwrap_or_else(PoisonError::into_inner) = Some(hook);
    }

    #[inline]
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Direct access to the ticker, for hosts that fire a `ManualTicker` themselves.
    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Inactive → Active: starts the ticker, which builds a frame immediately.
    ///
    /// Attaching an active clock restarts its schedule.
    pub fn on_attach(&mut self) -> Result<()> {
        let style = Arc::clone(&self.style);
        let source = Arc::clone(&self.time_source);
        let slot = Arc::clone(&self.latest);
        let hook_slot = Arc::clone(&self.invalidate);

        self.ticker.start(Box::new(move || -> Result<()> {
            let frame = build_frame(source.now(), &style);
            *slot.lock().map_err(|_| anyhow!("latest frame lock poisoned"))? = Some(frame);
            let hook = hook_slot
                .lock()
                .map_err(|_| anyhow!("invalidate hook lock poisoned"))?
                .clone();
            if let Some(hook) = hook {
                hook();
            }
            Ok(())
        }))?;

        if self.state == LifecycleState::Inactive {
            log::debug!("clock attached");
        } else {
            log::debug!("clock re-attached; schedule restarted");
        }
        self.state = LifecycleState::Active;
        Ok(())
    }

    /// Active → Inactive: stops the ticker. No tick runs after this returns.
    pub fn on_detach(&mut self) {
        if self.state == LifecycleState::Inactive {
            return;
        }
        self.ticker.stop();
        self.state = LifecycleState::Inactive;
        log::debug!("clock detached");
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// Frame built by the most recent tick, if the clock was ever attached.
    pub fn latest_frame(&self) -> Option<ClockFrame> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Frame for the time source's current reading, bypassing the ticker.
    pub fn frame_now(&self) -> ClockFrame {
        build_frame(self.time_source.now(), &self.style)
    }

    /// Paints the clock with its bounds' top-left at the painter's origin.
    ///
    /// Uses the latest ticked frame while active and a fresh reading otherwise.
    pub fn render(&self, painter: &mut Painter) {
        let frame = match self.state {
            LifecycleState::Active => self.latest_frame().unwrap_or_else(|| self.frame_now()),
            LifecycleState::Inactive => self.frame_now(),
        };
        painter.with_offset(self.style.padding().offset(), |p| frame.paint(p));
    }

    /// Desired size: the clock diameter plus padding, clamped to `constraints`.
    pub fn measure_size(&self, constraints: Constraints) -> Vec2 {
        let padding = self.style.padding();
        let diameter = 2.0 * self.style.radius();
        constraints.constrain(Vec2::new(diameter + padding.h(), diameter + padding.v()))
    }
}

impl<T: Ticker + 'static> Widget for ClockView<T> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.measure_size(constraints)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.with_offset(rect.origin, |p| self.render(p));
    }

    fn on_attach(&mut self) -> Result<()> {
        ClockView::on_attach(self)
    }

    fn on_detach(&mut self) {
        ClockView::on_detach(self)
    }
}

impl<T: Ticker> Drop for ClockView<T> {
    fn drop(&mut self) {
        self.on_detach();
    }
}
