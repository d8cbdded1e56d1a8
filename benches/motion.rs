//! Benchmarks for the coasting integrator and the tick loop
//!
//! Run with: cargo bench motion

use desktop_widgets::config::PanelSpec;
use desktop_widgets::messages::Msg;
use desktop_widgets::model::{Anchor, AppModel, PanelKind};
use desktop_widgets::motion::{
    MotionConfig, MotionSimulator, PanelSize, Point, ScreenBounds, ScreenRect,
};
use desktop_widgets::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const SCREEN: ScreenRect = ScreenRect::new(0.0, 0.0, 1920.0, 1080.0);

fn bounds() -> ScreenBounds {
    ScreenBounds::for_panel(SCREEN, PanelSize::new(200.0, 200.0))
}

fn flung(vx: f64, vy: f64) -> MotionSimulator {
    let from = Point::new(860.0, 440.0);
    let mut sim = MotionSimulator::new(
        MotionConfig::default(),
        Point::new(from.x - vx * 0.01, from.y - vy * 0.01),
    );
    sim.grab(0.0);
    sim.drag_to(from, 10.0);
    sim.release(bounds());
    sim
}

// ============================================================================
// Simulator only
// ============================================================================

#[divan::bench(args = [500.0, 5_000.0, 50_000.0])]
fn coast_until_settled(bencher: divan::Bencher, speed: f64) {
    let bounds = bounds();
    bencher
        .with_inputs(|| flung(speed, speed * 0.6))
        .bench_local_values(|mut sim| {
            let mut steps = 0u32;
            while sim.step(bounds).is_some() {
                steps += 1;
            }
            divan::black_box(steps)
        });
}

#[divan::bench]
fn single_step(bencher: divan::Bencher) {
    let bounds = bounds();
    bencher
        .with_inputs(|| flung(3_000.0, 2_000.0))
        .bench_local_values(|mut sim| divan::black_box(sim.step(bounds)));
}

// ============================================================================
// Full update loop: Msg::Tick through every panel
// ============================================================================

fn model_with_coasting_panels(count: usize) -> AppModel {
    let mut model = AppModel::new(SCREEN, MotionConfig::default(), 20.0);
    for i in 0..count {
        let x = 100.0 + (i % 8) as f64 * 200.0;
        let y = 100.0 + (i / 8) as f64 * 100.0;
        let id = model.add_panel(PanelSpec::new(PanelKind::Network, Anchor::Custom { x, y }));
        update(&mut model, Msg::pointer_down(id, x, y, 0.0));
        update(&mut model, Msg::pointer_move(id, x + 40.0, y + 25.0, 16.0));
        update(&mut model, Msg::pointer_up(id, x + 40.0, y + 25.0, 16.0));
    }
    model
}

#[divan::bench(args = [1, 4, 32])]
fn tick_coasting_panels(bencher: divan::Bencher, panels: usize) {
    bencher
        .with_inputs(|| model_with_coasting_panels(panels))
        .bench_local_values(|mut model| {
            let interval = model.motion.frame_interval_ms;
            let mut now = 16.0;
            for _ in 0..120 {
                now += interval;
                divan::black_box(update(&mut model, Msg::tick(now)));
            }
            model
        });
}
