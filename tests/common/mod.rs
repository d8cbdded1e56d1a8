//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use desktop_widgets::commands::Cmd;
use desktop_widgets::config::PanelSpec;
use desktop_widgets::messages::Msg;
use desktop_widgets::model::{Anchor, AppModel, PanelId, PanelKind};
use desktop_widgets::motion::{
    MotionConfig, MotionSimulator, Point, ScreenBounds, ScreenRect, StepOutcome,
};
use desktop_widgets::update::update;

pub const SCREEN: ScreenRect = ScreenRect::new(0.0, 0.0, 1920.0, 1080.0);

/// Empty model on a 1920x1080 display with default physics
pub fn test_model() -> AppModel {
    AppModel::new(SCREEN, MotionConfig::default(), 20.0)
}

/// Model with a single panel whose top-left corner is at (x, y)
pub fn model_with_panel(kind: PanelKind, x: f64, y: f64) -> (AppModel, PanelId) {
    let mut model = test_model();
    let id = model.add_panel(PanelSpec::new(kind, Anchor::Custom { x, y }));
    (model, id)
}

/// Grab a panel at its corner, move it by (dx, dy) over `dt_ms`, and let go
///
/// Returns the time of release.
pub fn fling(model: &mut AppModel, id: PanelId, dx: f64, dy: f64, t0: f64, dt_ms: f64) -> f64 {
    let start = model.panel(id).unwrap().position();
    update(model, Msg::pointer_down(id, start.x, start.y, t0));
    let t1 = t0 + dt_ms;
    update(model, Msg::pointer_move(id, start.x + dx, start.y + dy, t1));
    update(model, Msg::pointer_up(id, start.x + dx, start.y + dy, t1));
    t1
}

/// Tick once per frame interval until nothing is animating
///
/// Returns every command produced and the time of the last tick.
pub fn run_until_settled(model: &mut AppModel, start_ms: f64, max_ms: f64) -> (Vec<Cmd>, f64) {
    let interval = model.motion.frame_interval_ms;
    let mut cmds = Vec::new();
    let mut now = start_ms;

    while model.is_animating() && now - start_ms < max_ms {
        now += interval;
        if let Some(cmd) = update(model, Msg::tick(now)) {
            cmds.extend(cmd.flatten());
        }
    }

    (cmds, now)
}

/// Bounds for a 200x200 panel on `SCREEN`
pub fn battery_bounds() -> ScreenBounds {
    ScreenBounds::for_panel(SCREEN, PanelKind::Battery.default_size())
}

/// Start a simulator at `from` and release it with `velocity` px/s
///
/// The drag covers a 10ms sample so the tracker sees the exact velocity.
pub fn released_at(from: Point, vx: f64, vy: f64, bounds: ScreenBounds) -> MotionSimulator {
    let origin = Point::new(from.x - vx * 0.01, from.y - vy * 0.01);
    let mut sim = MotionSimulator::new(MotionConfig::default(), origin);
    sim.grab(0.0);
    sim.drag_to(from, 10.0);
    sim.release(bounds);
    sim
}

/// Step until the simulator stops coasting, collecting every outcome
pub fn coast(sim: &mut MotionSimulator, bounds: ScreenBounds) -> Vec<StepOutcome> {
    let mut outcomes = Vec::new();
    while let Some(outcome) = sim.step(bounds) {
        outcomes.push(outcome);
        assert!(outcomes.len() < 10_000, "coast never settled");
    }
    outcomes
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
