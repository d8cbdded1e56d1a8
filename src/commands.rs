//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! They are the engine's only outputs: the host moves windows on
//! `MovePanel` and may react to `PanelSettled`.

use crate::model::PanelId;
use crate::motion::Point;

/// Pointer shape to show over a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCursor {
    /// Open hand: the panel can be grabbed
    Grab,
    /// Closed hand: a drag is in progress
    Grabbing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Move a panel's window so its top-left corner is at `position`
    MovePanel { id: PanelId, position: Point },
    /// A coasting panel just came to rest
    PanelSettled { id: PanelId, position: Point },
    /// Change the pointer shape over a panel
    SetCursor { id: PanelId, cursor: PanelCursor },
    /// Repaint a panel's chrome
    Redraw { id: PanelId },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|cmd| !matches!(cmd, Cmd::None));
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a repaint of some panel
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::MovePanel { .. } => false,
            Cmd::PanelSettled { .. } => false,
            Cmd::SetCursor { .. } => false,
            Cmd::Redraw { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten into a list of leaf commands, in order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Last position this command moves `id` to, if any
    pub fn final_position(&self, id: PanelId) -> Option<Point> {
        match self {
            Cmd::MovePanel { id: target, position } if *target == id => Some(*position),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.final_position(id)),
            _ => None,
        }
    }
}
