//! Time subsystem.
//!
//! Provides wall-clock sampling and tick scheduling without coupling to a
//! UI runtime. Intended usage:
//! - one [`TimeSource`] per widget, sampled on every tick
//! - one [`Ticker`] per active widget, started on attach and stopped on detach

mod source;
mod ticker;
mod time_of_day;

pub use source::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use ticker::{
    ManualTicker, ThreadTicker, TickCallback, Ticker, DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL,
};
pub use time_of_day::{TimeOfDay, TimeOfDayError};
