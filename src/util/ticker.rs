//! Owned repeating timer.
//!
//! Dropping or stopping a `Ticker` cancels the underlying interval, so a
//! paused or finished stopwatch never leaves a timer behind.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

#[derive(Default)]
pub struct Ticker {
    #[cfg(feature = "csr")]
    interval: Option<Interval>,
    #[cfg(not(feature = "csr"))]
    running: bool,
}

impl Ticker {
    /// Run `on_tick` every `period_ms`, replacing any interval already running.
    pub fn start<F>(&mut self, period_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        #[cfg(feature = "csr")]
        {
            self.interval = Some(Interval::new(period_ms, on_tick));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (period_ms, on_tick);
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        #[cfg(feature = "csr")]
        {
            // Dropping the handle clears the browser interval.
            self.interval = None;
        }
        #[cfg(not(feature = "csr"))]
        {
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.interval.is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            self.running
        }
    }
}
