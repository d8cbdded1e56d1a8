//! Fixed-timestep coasting integrator and drag state machine
//!
//! ```text
//!            grab                 release (fast)
//!   Idle ──────────▶ Dragging ──────────────────▶ Coasting
//!    ▲                 │  ▲                          │  │
//!    │ release (slow)  │  └──────── grab ────────────┘  │
//!    └─────────────────┘                                │
//!    ▲               step: both axes below min_velocity │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! The simulator never reads a clock. Each [`MotionSimulator::step`] advances
//! by the nominal frame interval, so a given release always produces the same
//! trajectory regardless of timer jitter.

use serde::Serialize;

use super::config::MotionConfig;
use super::geometry::{Point, ScreenBounds, Vector};
use super::tracker::PointerTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MotionState {
    #[default]
    Idle,
    Dragging,
    Coasting,
}

/// What happened when the pointer let go
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// The simulator was not dragging; nothing changed
    Ignored,
    /// Exit velocity was above the threshold on at least one axis
    Coasting { velocity: Vector },
    /// Released too slowly to fling; the panel stays put (clamped on screen)
    Rested { position: Point },
}

/// Result of one integration tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Committed position after this tick
    pub position: Point,
    /// Velocity after bounce and damping (zero once settled)
    pub velocity: Vector,
    pub bounced_x: bool,
    pub bounced_y: bool,
    /// The panel came to rest on this tick and is now `Idle`
    pub settled: bool,
}

#[derive(Debug, Clone)]
pub struct MotionSimulator {
    config: MotionConfig,
    state: MotionState,
    position: Point,
    velocity: Vector,
    tracker: PointerTracker,
    drag_origin: Option<Point>,
}

impl MotionSimulator {
    pub fn new(config: MotionConfig, position: Point) -> Self {
        Self {
            config,
            state: MotionState::Idle,
            position,
            velocity: Vector::ZERO,
            tracker: PointerTracker::new(),
            drag_origin: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Where the current drag started, if one is active
    pub fn drag_origin(&self) -> Option<Point> {
        self.drag_origin
    }

    /// Velocity the tracker would hand over if released right now
    pub fn pending_velocity(&self) -> Vector {
        self.tracker.velocity()
    }

    /// Pointer-down: start (or restart) a drag from the current position
    ///
    /// Catching a coasting panel stops it dead. Returns the state the
    /// simulator was in before the grab.
    pub fn grab(&mut self, timestamp_ms: f64) -> MotionState {
        let previous = self.state;
        self.state = MotionState::Dragging;
        self.velocity = Vector::ZERO;
        self.drag_origin = Some(self.position);
        self.tracker.begin(self.position, timestamp_ms);
        tracing::debug!(
            target: "motion",
            from = ?previous,
            x = self.position.x,
            y = self.position.y,
            "drag started"
        );
        previous
    }

    /// Pointer-move: place the panel directly, no physics
    ///
    /// Returns `false` (and does nothing) unless a drag is active.
    pub fn drag_to(&mut self, position: Point, timestamp_ms: f64) -> bool {
        if self.state != MotionState::Dragging {
            return false;
        }
        self.position = position;
        self.tracker.track(position, timestamp_ms);
        true
    }

    /// Pointer-up: hand the tracked velocity to the integrator
    pub fn release(&mut self, bounds: ScreenBounds) -> Release {
        if self.state != MotionState::Dragging {
            return Release::Ignored;
        }

        let velocity = self.tracker.end();
        self.drag_origin = None;

        if self.config.is_moving(velocity.x, velocity.y) {
            self.state = MotionState::Coasting;
            self.velocity = velocity;
            tracing::debug!(
                target: "motion",
                vx = velocity.x,
                vy = velocity.y,
                "released into coast"
            );
            Release::Coasting { velocity }
        } else {
            self.state = MotionState::Idle;
            self.velocity = Vector::ZERO;
            self.position = bounds.clamp(self.position);
            tracing::debug!(
                target: "motion",
                x = self.position.x,
                y = self.position.y,
                "released at rest"
            );
            Release::Rested {
                position: self.position,
            }
        }
    }

    /// Advance one frame while coasting
    ///
    /// Returns `None` without touching any state when not coasting, so a
    /// tick delivered after a grab or a settle is harmless.
    pub fn step(&mut self, bounds: ScreenBounds) -> Option<StepOutcome> {
        if self.state != MotionState::Coasting {
            return None;
        }

        let margin = self.config.edge_margin;
        let bounce = self.config.bounce_damping;
        let (left, right) = bounds.horizontal();
        let (top, bottom) = bounds.vertical();

        let mut candidate = self.position + self.velocity * self.config.frame_interval_secs();

        let bounced_x = collide(
            &mut candidate.x,
            &mut self.velocity.x,
            left,
            right,
            margin,
            bounce,
        );
        let bounced_y = collide(
            &mut candidate.y,
            &mut self.velocity.y,
            top,
            bottom,
            margin,
            bounce,
        );

        if bounced_x || bounced_y {
            tracing::trace!(
                target: "motion",
                bounced_x,
                bounced_y,
                vx = self.velocity.x,
                vy = self.velocity.y,
                "edge bounce"
            );
        }

        self.velocity *= self.config.damping;

        let settled = self.config.is_at_rest(self.velocity.x, self.velocity.y);
        if settled {
            self.velocity = Vector::ZERO;
            candidate.x = snap(candidate.x, left, right, margin);
            candidate.y = snap(candidate.y, top, bottom, margin);
            self.state = MotionState::Idle;
            tracing::debug!(
                target: "motion",
                x = candidate.x,
                y = candidate.y,
                "coast settled"
            );
        }

        self.position = candidate;

        Some(StepOutcome {
            position: candidate,
            velocity: self.velocity,
            bounced_x,
            bounced_y,
            settled,
        })
    }

    /// Pull an idle panel back inside `bounds` (after a display or size change)
    ///
    /// Returns the new position if it moved. Dragging and coasting panels are
    /// left alone; a coasting panel picks up the new bounds on its next step.
    pub fn contain(&mut self, bounds: ScreenBounds) -> Option<Point> {
        if self.state != MotionState::Idle {
            return None;
        }
        let clamped = bounds.clamp(self.position);
        if clamped == self.position {
            return None;
        }
        self.position = clamped;
        Some(clamped)
    }

    /// Teleport an idle panel (initial placement)
    pub fn place(&mut self, position: Point) {
        if self.state == MotionState::Idle {
            self.position = position;
        }
    }
}

/// Collision response for one axis
///
/// A candidate inside the margin band at either edge is pinned to that edge
/// and its velocity reflected and scaled by `bounce`. The low edge is tested
/// first, which keeps the outcome deterministic when the bands overlap.
fn collide(pos: &mut f64, vel: &mut f64, low: f64, high: f64, margin: f64, bounce: f64) -> bool {
    if *pos < low + margin {
        *pos = low;
    } else if *pos > high - margin {
        *pos = high;
    } else {
        return false;
    }
    *vel = -*vel * bounce;
    true
}

/// Snap one axis of a settled panel onto an edge within `margin`
fn snap(pos: f64, low: f64, high: f64, margin: f64) -> f64 {
    if (pos - low).abs() < margin {
        low
    } else if (pos - high).abs() < margin {
        high
    } else {
        pos
    }
}
