//! App-wide message handling: animation ticks and display changes

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::motion::BoundsProvider;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    let cmd = match msg {
        AppMsg::Tick { now_ms } => tick(model, now_ms),
        AppMsg::DisplayGeometryChanged(rect) => {
            if !model.display.update(rect) {
                return None;
            }
            contain_idle_panels(model)
        }
    };
    (cmd != Cmd::None).then_some(cmd)
}

/// Step every coasting panel once per elapsed frame interval
///
/// Bounds are re-read from the display before every step, so a display
/// change delivered between ticks is honoured on the very next one.
fn tick(model: &mut AppModel, now_ms: f64) -> Cmd {
    let display = model.display;
    let mut cmds = Vec::new();

    for panel in model.panels.values_mut() {
        let id = panel.id;
        for _ in 0..panel.scheduler.due_ticks(now_ms) {
            let bounds = display.current_bounds(panel.size);
            let Some(outcome) = panel.simulator.step(bounds) else {
                // Grabbed or already settled; a stale tick does nothing
                panel.scheduler.stop();
                break;
            };

            cmds.push(Cmd::MovePanel {
                id,
                position: outcome.position,
            });

            if outcome.settled {
                panel.scheduler.stop();
                cmds.push(Cmd::PanelSettled {
                    id,
                    position: outcome.position,
                });
                break;
            }
        }
    }

    Cmd::batch(cmds)
}

/// Keep idle panels on screen after the display shrinks or moves
fn contain_idle_panels(model: &mut AppModel) -> Cmd {
    let display = model.display;
    let cmds = model
        .panels
        .values_mut()
        .filter_map(|panel| {
            let bounds = display.current_bounds(panel.size);
            panel
                .simulator
                .contain(bounds)
                .map(|position| Cmd::MovePanel {
                    id: panel.id,
                    position,
                })
        })
        .collect();
    Cmd::batch(cmds)
}
