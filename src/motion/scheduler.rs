//! Deadline-based tick source for coasting panels
//!
//! The scheduler doesn't own a timer. The host asks it how many ticks are
//! due at "now" and when the next one falls, and sleeps until then
//! (`ControlFlow::WaitUntil` in the winit runtime). Time is plain monotonic
//! milliseconds so the whole thing is testable without a clock.

/// Upper bound on ticks replayed after a stall (e.g. the window was dragged
/// by the compositor or the machine was suspended). Missed intervals past
/// this are dropped rather than fast-forwarded.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    interval_ms: f64,
    next_deadline_ms: Option<f64>,
}

impl AnimationScheduler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_deadline_ms: None,
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_deadline_ms.is_some()
    }

    /// When the next tick is due, if running
    #[inline]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.next_deadline_ms
    }

    /// Begin ticking one interval from `now_ms`
    ///
    /// Returns `false` if already running; the existing cadence is kept.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.next_deadline_ms = Some(now_ms + self.interval_ms);
        true
    }

    /// Stop ticking. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        self.next_deadline_ms.take().is_some()
    }

    /// Number of ticks to run at `now_ms`, advancing the deadline past them
    pub fn due_ticks(&mut self, now_ms: f64) -> u32 {
        let Some(deadline) = self.next_deadline_ms else {
            return 0;
        };
        if now_ms < deadline {
            return 0;
        }

        // Counted in f64: a long enough stall overflows any integer type
        let elapsed = ((now_ms - deadline) / self.interval_ms).floor() + 1.0;
        self.next_deadline_ms = Some(deadline + elapsed * self.interval_ms);
        elapsed.min(MAX_CATCH_UP_TICKS as f64) as u32
    }
}
