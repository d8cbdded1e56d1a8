//! Exit-velocity estimation for an active drag
//!
//! Velocity is the displacement between the last two pointer samples divided
//! by their time difference. There is no averaging, so a jittery final move
//! produces a jittery fling.

use super::geometry::{Point, Vector};

/// The most recent panel position observed during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub position: Point,
    pub timestamp_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last: Option<DragSample>,
    velocity: Vector,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `position`, discarding any previous estimate
    pub fn begin(&mut self, position: Point, timestamp_ms: f64) {
        self.last = Some(DragSample {
            position,
            timestamp_ms,
        });
        self.velocity = Vector::ZERO;
    }

    /// Record a move sample
    ///
    /// A zero or negative time step (duplicate or out-of-order timestamp)
    /// keeps the previous velocity. The sample is replaced either way.
    pub fn track(&mut self, position: Point, timestamp_ms: f64) {
        if let Some(last) = self.last {
            let dt = (timestamp_ms - last.timestamp_ms) / 1000.0;
            if dt > 0.0 {
                self.velocity = Vector::new(
                    (position.x - last.position.x) / dt,
                    (position.y - last.position.y) / dt,
                );
            }
        }

        self.last = Some(DragSample {
            position,
            timestamp_ms,
        });
    }

    /// Finish the drag, returning the exit velocity in px/s
    pub fn end(&mut self) -> Vector {
        let velocity = self.velocity;
        self.last = None;
        self.velocity = Vector::ZERO;
        velocity
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn last_sample(&self) -> Option<DragSample> {
        self.last
    }
}
