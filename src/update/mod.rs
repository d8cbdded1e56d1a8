//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::MotionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(id, m) => panel::update_panel(model, id, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AppMsg, PanelMsg, PointerMsg};
    use crate::motion::BoundsProvider;

    // Ticks and drag moves arrive at frame rate
    let is_noisy = matches!(
        &msg,
        Msg::App(AppMsg::Tick { .. }) | Msg::Panel(_, PanelMsg::Pointer(PointerMsg::Move { .. }))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before: Vec<_> = model.panels.values().map(MotionSnapshot::from_panel).collect();

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    for (before, panel) in before.iter().zip(model.panels.values()) {
        let after = MotionSnapshot::from_panel(panel);
        if let Some(diff) = before.diff(&after) {
            if is_noisy {
                tracing::trace!(target: "motion", panel = panel.id.0, %diff, "state changed");
            } else {
                debug!(target: "motion", panel = panel.id.0, %diff, "state changed");
            }
        }
        panel.assert_invariants(model.display.current_bounds(panel.size), &msg_name);
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Panel(PanelId(1), Resized { width: 300.0, height: 120.0 })`
/// - `App(Tick { now_ms: 16.6 })`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    format!("{:?}", msg)
}
