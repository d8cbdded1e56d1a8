//! Inertial drag-and-release positioning
//!
//! This module is the physics core and has no knowledge of windows:
//!
//! - `geometry` - points, velocities, screen rects and per-panel bounds
//! - `config` - immutable tuning constants
//! - `tracker` - exit-velocity estimation during a drag
//! - `simulator` - the Idle/Dragging/Coasting state machine and integrator
//! - `scheduler` - deadline-based tick source for coasting
//! - `bounds` - `BoundsProvider` and the host display geometry

mod bounds;
mod config;
mod geometry;
mod scheduler;
mod simulator;
mod tracker;

pub use bounds::{BoundsProvider, DisplayGeometry};
pub use config::{MotionConfig, DEFAULT_FRAME_RATE};
pub use geometry::{PanelSize, Point, ScreenBounds, ScreenRect, Vector};
pub use scheduler::{AnimationScheduler, MAX_CATCH_UP_TICKS};
pub use simulator::{MotionSimulator, MotionState, Release, StepOutcome};
pub use tracker::{DragSample, PointerTracker};
