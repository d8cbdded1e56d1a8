//! Motion tuning constants

/// Target tick rate for coasting panels
pub const DEFAULT_FRAME_RATE: f64 = 120.0;

/// Immutable physics constants for one panel
///
/// Built once at startup (from [`crate::config::MotionSettings`] or
/// [`MotionConfig::default`]) and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Per-tick velocity multiplier while coasting, in (0, 1)
    pub damping: f64,
    /// Multiplier applied to a reflected velocity component, in (0, 1)
    pub bounce_damping: f64,
    /// Speed (px/s) below which an axis counts as stopped
    pub min_velocity: f64,
    /// Width of the collision band and the snap-proximity threshold (px)
    pub edge_margin: f64,
    /// Nominal tick period used by both the scheduler and the integrator
    pub frame_interval_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            damping: 0.95,
            bounce_damping: 0.5,
            min_velocity: 0.1,
            edge_margin: 20.0,
            frame_interval_ms: 1000.0 / DEFAULT_FRAME_RATE,
        }
    }
}

impl MotionConfig {
    /// Validate a set of constants
    ///
    /// Both damping factors must lie strictly inside (0, 1), otherwise
    /// coasting is not guaranteed to come to rest.
    pub fn new(
        damping: f64,
        bounce_damping: f64,
        min_velocity: f64,
        edge_margin: f64,
        frame_interval_ms: f64,
    ) -> Result<Self, String> {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(format!("damping must be in (0, 1), got {}", damping));
        }
        if !(bounce_damping > 0.0 && bounce_damping < 1.0) {
            return Err(format!(
                "bounce_damping must be in (0, 1), got {}",
                bounce_damping
            ));
        }
        if !(min_velocity > 0.0 && min_velocity.is_finite()) {
            return Err(format!(
                "min_velocity must be positive, got {}",
                min_velocity
            ));
        }
        if !(edge_margin >= 0.0 && edge_margin.is_finite()) {
            return Err(format!(
                "edge_margin must not be negative, got {}",
                edge_margin
            ));
        }
        if !(frame_interval_ms > 0.0 && frame_interval_ms.is_finite()) {
            return Err(format!(
                "frame interval must be positive, got {}ms",
                frame_interval_ms
            ));
        }

        Ok(Self {
            damping,
            bounce_damping,
            min_velocity,
            edge_margin,
            frame_interval_ms,
        })
    }

    /// Tick period in seconds, as used by the integrator
    #[inline]
    pub fn frame_interval_secs(&self) -> f64 {
        self.frame_interval_ms / 1000.0
    }

    /// True when either axis of `velocity` is fast enough to keep coasting
    #[inline]
    pub fn is_moving(&self, vx: f64, vy: f64) -> bool {
        vx.abs() > self.min_velocity || vy.abs() > self.min_velocity
    }

    /// True when both axes have dropped below the stop threshold
    #[inline]
    pub fn is_at_rest(&self, vx: f64, vy: f64) -> bool {
        vx.abs() < self.min_velocity && vy.abs() < self.min_velocity
    }
}
