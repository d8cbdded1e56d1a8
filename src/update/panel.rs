//! Per-panel message handling: pointer drags and size changes

use crate::commands::{Cmd, PanelCursor};
use crate::messages::{PanelMsg, PointerMsg};
use crate::model::{AppModel, Panel, PanelId};
use crate::motion::{BoundsProvider, MotionState, PanelSize, Release, ScreenBounds};

/// Handle a message for one panel
pub fn update_panel(model: &mut AppModel, id: PanelId, msg: PanelMsg) -> Option<Cmd> {
    let display = model.display;
    let Some(panel) = model.panels.get_mut(&id) else {
        tracing::warn!(panel = id.0, ?msg, "message for unknown panel");
        return None;
    };

    match msg {
        PanelMsg::Pointer(pointer) => {
            let bounds = display.current_bounds(panel.size);
            update_pointer(panel, bounds, pointer)
        }
        PanelMsg::Resized { width, height } => {
            let size = PanelSize::new(width, height);
            if size == panel.size {
                return None;
            }
            panel.size = size;

            let mut cmds = vec![Cmd::Redraw { id }];
            if let Some(position) = panel.simulator.contain(display.current_bounds(size)) {
                cmds.push(Cmd::MovePanel { id, position });
            }
            Some(Cmd::batch(cmds))
        }
    }
}

fn update_pointer(panel: &mut Panel, bounds: ScreenBounds, msg: PointerMsg) -> Option<Cmd> {
    let id = panel.id;

    match msg {
        PointerMsg::Down {
            position,
            timestamp_ms,
        } => {
            if panel.grab(position, timestamp_ms) == MotionState::Coasting {
                tracing::debug!(panel = id.0, "caught coasting panel");
            }
            Some(Cmd::SetCursor {
                id,
                cursor: PanelCursor::Grabbing,
            })
        }

        PointerMsg::Move {
            position,
            timestamp_ms,
        } => panel
            .drag(position, timestamp_ms)
            .map(|position| Cmd::MovePanel { id, position }),

        PointerMsg::Up { timestamp_ms, .. } => {
            panel.take_grab()?;
            let before = panel.position();
            let cursor = Cmd::SetCursor {
                id,
                cursor: PanelCursor::Grab,
            };

            match panel.simulator.release(bounds) {
                Release::Ignored => Some(cursor),
                Release::Coasting { .. } => {
                    panel.scheduler.start(timestamp_ms);
                    Some(cursor)
                }
                Release::Rested { position } => {
                    let mut cmds = vec![cursor];
                    if position != before {
                        cmds.push(Cmd::MovePanel { id, position });
                    }
                    Some(Cmd::batch(cmds))
                }
            }
        }
    }
}
