//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Timestamps are
//! monotonic milliseconds supplied by the host.

use crate::model::PanelId;
use crate::motion::{Point, ScreenRect};

/// Left-button pointer events in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Down { position: Point, timestamp_ms: f64 },
    Move { position: Point, timestamp_ms: f64 },
    Up { position: Point, timestamp_ms: f64 },
}

/// Messages addressed to a single panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    Pointer(PointerMsg),
    /// The panel's outer size changed
    Resized { width: f64, height: f64 },
}

/// Application-wide messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMsg {
    /// Run whatever animation ticks are due at `now_ms`
    Tick { now_ms: f64 },
    /// The usable screen area changed
    DisplayGeometryChanged(ScreenRect),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Panel(PanelId, PanelMsg),
    App(AppMsg),
}

impl Msg {
    pub fn pointer_down(id: PanelId, x: f64, y: f64, timestamp_ms: f64) -> Self {
        Msg::Panel(
            id,
            PanelMsg::Pointer(PointerMsg::Down {
                position: Point::new(x, y),
                timestamp_ms,
            }),
        )
    }

    pub fn pointer_move(id: PanelId, x: f64, y: f64, timestamp_ms: f64) -> Self {
        Msg::Panel(
            id,
            PanelMsg::Pointer(PointerMsg::Move {
                position: Point::new(x, y),
                timestamp_ms,
            }),
        )
    }

    pub fn pointer_up(id: PanelId, x: f64, y: f64, timestamp_ms: f64) -> Self {
        Msg::Panel(
            id,
            PanelMsg::Pointer(PointerMsg::Up {
                position: Point::new(x, y),
                timestamp_ms,
            }),
        )
    }

    pub fn tick(now_ms: f64) -> Self {
        Msg::App(AppMsg::Tick { now_ms })
    }
}
