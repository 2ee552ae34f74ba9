use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};

/// Refresh cadence of an analog clock face.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Shortest interval a [`ThreadTicker`] waits between ticks.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Work executed on every tick.
///
/// An `Err` or a panic is logged and confined to that tick; the schedule keeps going.
pub type TickCallback = Box<dyn FnMut() -> Result<()> + Send + 'static>;

/// Periodic callback scheduler.
///
/// Contract shared by all implementations:
/// - `start` invokes the callback once immediately, then once per interval
/// - `start` while running replaces the schedule; two invocations never overlap
/// - once `stop` returns, the callback is not invoked again
/// - a failing tick does not end the schedule
pub trait Ticker: Send {
    fn start(&mut self, callback: TickCallback) -> Result<()>;

    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Number of callback invocations since construction (failed ones included).
    fn tick_count(&self) -> u64;
}

/// Runs one tick with fault isolation.
fn run_tick(callback: &mut TickCallback, ticks: &AtomicU64) {
    let index = ticks.fetch_add(1, Ordering::Relaxed);

    match panic::catch_unwind(AssertUnwindSafe(|| callback())) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => log::warn!("tick {index} failed: {err:#}"),
        Err(payload) => log::error!("tick {index} panicked: {}", panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

// ── ThreadTicker ──────────────────────────────────────────────────────────

/// Background worker owned by a running [`ThreadTicker`].
struct Worker {
    stop_tx: Sender<()>,
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Ticker backed by a dedicated thread.
///
/// The worker blocks on a stop channel with `recv_timeout(interval)`: a timeout
/// is a tick, a message (or a dropped sender) is shutdown. The next wait starts
/// after the current callback returns, so jitter accumulates instead of
/// bunching ticks together; consumers re-derive the time on every tick.
///
/// Dropping the ticker stops it.
pub struct ThreadTicker {
    interval: Duration,
    worker: Option<Worker>,
    ticks: Arc<AtomicU64>,
}

impl ThreadTicker {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Intervals below [`MIN_TICK_INTERVAL`] are raised to it.
    pub fn with_interval(interval: Duration) -> Self {
        let clamped = interval.max(MIN_TICK_INTERVAL);
        if clamped != interval {
            log::warn!("tick interval {interval:?} raised to {clamped:?}");
        }
        Self { interval: clamped, worker: None, ticks: Arc::new(AtomicU64::new(0)) }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for ThreadTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker for ThreadTicker {
    fn start(&mut self, mut callback: TickCallback) -> Result<()> {
        self.stop();

        // First tick runs on the caller so the host has a frame before `start` returns.
        run_tick(&mut callback, &self.ticks);

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);
        let ticks = Arc::clone(&self.ticks);
        let interval = self.interval;

        let handle = thread::Builder::new()
            .name("clockview-ticker".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if worker_cancelled.load(Ordering::Acquire) {
                            break;
                        }
                        run_tick(&mut callback, &ticks);
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .context("failed to spawn ticker thread")?;

        log::debug!("ticker started (interval {:?})", interval);
        self.worker = Some(Worker { stop_tx, cancelled, handle });
        Ok(())
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        worker.cancelled.store(true, Ordering::Release);
        // The worker may already be gone; a closed channel is fine.
        let _ = worker.stop_tx.send(());

        // Joining from the worker itself would deadlock; the flag is enough there.
        if worker.handle.thread().id() != thread::current().id() {
            if worker.handle.join().is_err() {
                log::error!("ticker thread terminated abnormally");
            }
        }

        log::debug!("ticker stopped after {} ticks", self.ticks.load(Ordering::Relaxed));
    }

    fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

// ── ManualTicker ──────────────────────────────────────────────────────────

/// Ticker fired explicitly by its owner.
///
/// Suits single-threaded hosts that already own a timer (an event loop, a
/// frame callback) and deterministic tests.
#[derive(Default)]
pub struct ManualTicker {
    callback: Option<TickCallback>,
    ticks: AtomicU64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one tick. Returns `false` when stopped (nothing was invoked).
    pub fn fire(&mut self) -> bool {
        match self.callback.as_mut() {
            Some(cb) => {
                run_tick(cb, &self.ticks);
                true
            }
            None => false,
        }
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, callback: TickCallback) -> Result<()> {
        self.callback = Some(callback);
        self.fire();
        Ok(())
    }

    fn stop(&mut self) {
        self.callback = None;
    }

    fn is_running(&self) -> bool {
        self.callback.is_some()
    }

    fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use std::time::Instant;

    fn counting(counter: &Arc<AtomicUsize>) -> TickCallback {
        let counter = Arc::clone(counter);
        Box::new(move || -> Result<()> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn wait_for(counter: &AtomicUsize, at_least: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while counter.load(Ordering::SeqCst) < at_least {
            assert!(Instant::now() < deadline, "ticker did not reach {at_least} ticks");
            thread::sleep(Duration::from_millis(2));
        }
    }

    // ── ManualTicker ──────────────────────────────────────────────────────

    #[test]
    fn manual_start_fires_immediately() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut ticker = ManualTicker::new();
        ticker.start(counting(&counter)).unwrap();

        assert!(ticker.is_running());
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(ticker.fire());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(ticker.tick_count(), 2);
    }

    #[test]
    fn manual_fire_after_stop_is_a_no_op() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut ticker = ManualTicker::new();
        ticker.start(counting(&counter)).unwrap();
        ticker.stop();

        assert!(!ticker.fire());
        assert!(!ticker.is_running());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_ticks_do_not_end_schedule() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let mut ticker = ManualTicker::new();
        ticker
            .start(Box::new(move || -> Result<()> {
                let n = c.fetch_add(1, Ordering::SeqCst);
                match n % 3 {
                    0 => anyhow::bail!("tick {n} failed on purpose"),
                    1 => panic!("tick {n} panicked on purpose"),
                    _ => Ok(()),
                }
            }))
            .unwrap();

        for _ in 0..5 {
            assert!(ticker.fire());
        }
        assert_eq!(counter.load(Ordering::SeqCst), 6);
        assert!(ticker.is_running());
    }

    // ── ThreadTicker ──────────────────────────────────────────────────────

    #[test]
    fn thread_ticker_repeats_until_stopped() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut ticker = ThreadTicker::with_interval(Duration::from_millis(5));
        ticker.start(counting(&counter)).unwrap();
        wait_for(&counter, 4);

        ticker.stop();
        assert!(!ticker.is_running());
        let after_stop = counter.load(Ordering::SeqCst);

        thread::sleep(Duration::from_millis(40));
        assert_eq!(counter.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn stop_right_after_start_cancels_pending_tick() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut ticker = ThreadTicker::with_interval(Duration::from_millis(20));
        ticker.start(counting(&counter)).unwrap();
        ticker.stop();

        thread::sleep(Duration::from_millis(60));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn restart_never_overlaps_invocations() {
        let in_tick = Arc::new(AtomicBool::new(false));
        let overlapped = Arc::new(AtomicBool::new(false));
        let counter = Arc::new(AtomicUsize::new(0));

        let make = || -> TickCallback {
            let in_tick = Arc::clone(&in_tick);
            let overlapped = Arc::clone(&overlapped);
            let counter = Arc::clone(&counter);
            Box::new(move || -> Result<()> {
                if in_tick.swap(true, Ordering::SeqCst) {
                    overlapped.store(true, Ordering::SeqCst);
                }
                thread::sleep(Duration::from_millis(1));
                counter.fetch_add(1, Ordering::SeqCst);
                in_tick.store(false, Ordering::SeqCst);
                Ok(())
            })
        };

        let mut ticker = ThreadTicker::with_interval(Duration::from_millis(3));
        ticker.start(make()).unwrap();
        wait_for(&counter, 3);
        ticker.start(make()).unwrap();
        wait_for(&counter, 6);
        ticker.stop();

        assert!(!overlapped.load(Ordering::SeqCst));
    }

    #[test]
    fn thread_ticker_survives_errors() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let mut ticker = ThreadTicker::with_interval(Duration::from_millis(2));
        ticker
            .start(Box::new(move || -> Result<()> {
                c.fetch_add(1, Ordering::SeqCst);
                anyhow::bail!("always failing")
            }))
            .unwrap();

        wait_for(&counter, 3);
        ticker.stop();
        assert!(ticker.tick_count() >= 3);
    }

    #[test]
    fn zero_interval_is_raised_to_the_minimum() {
        let ticker = ThreadTicker::with_interval(Duration::ZERO);
        assert_eq!(ticker.interval(), MIN_TICK_INTERVAL);
        assert_eq!(ThreadTicker::new().interval(), DEFAULT_TICK_INTERVAL);
    }

    #[test]
    fn stop_from_inside_the_callback_ends_the_schedule() {
        let counter = Arc::new(AtomicUsize::new(0));
        let ticker = Arc::new(Mutex::new(ThreadTicker::with_interval(Duration::from_millis(2))));

        let c = Arc::clone(&counter);
        let handle = Arc::downgrade(&ticker);
        let callback: TickCallback = Box::new(move || -> Result<()> {
            // The first tick runs inside `start`, while the test still holds the lock.
            if c.fetch_add(1, Ordering::SeqCst) + 1 == 3 {
                if let Some(ticker) = handle.upgrade() {
                    ticker.lock().unwrap().stop();
                }
            }
            Ok(())
        });
        ticker.lock().unwrap().start(callback).unwrap();

        wait_for(&counter, 3);
        thread::sleep(Duration::from_millis(30));

        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert!(!ticker.lock().unwrap().is_running());
    }

    #[test]
    fn drop_stops_the_worker() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let mut ticker = ThreadTicker::with_interval(Duration::from_millis(2));
            ticker.start(counting(&counter)).unwrap();
            wait_for(&counter, 2);
        }
        let after_drop = counter.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(counter.load(Ordering::SeqCst), after_drop);
    }
}
