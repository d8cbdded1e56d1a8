//! A single draggable panel: identity, size and motion state

use serde::{Deserialize, Serialize};

use crate::motion::{
    AnimationScheduler, MotionConfig, MotionSimulator, MotionState, PanelSize, Point, Vector,
};

/// Unique identifier for a panel within one running app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PanelId(pub u64);

/// The kinds of widget panel the app knows how to open
///
/// A kind only fixes the title and the default size. Whatever the panel
/// displays is drawn by a collaborator into the rectangle the engine moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    SystemMonitor,
    Network,
    Battery,
    Music,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::SystemMonitor,
        PanelKind::Network,
        PanelKind::Battery,
        PanelKind::Music,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::SystemMonitor => "System Monitor",
            PanelKind::Network => "Network",
            PanelKind::Battery => "Battery",
            PanelKind::Music => "Now Playing",
        }
    }

    pub fn default_size(&self) -> PanelSize {
        match self {
            PanelKind::SystemMonitor | PanelKind::Network => PanelSize::new(300.0, 120.0),
            PanelKind::Battery => PanelSize::new(200.0, 200.0),
            PanelKind::Music => PanelSize::new(500.0, 100.0),
        }
    }

    /// Stable name used in config files and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            PanelKind::SystemMonitor => "system-monitor",
            PanelKind::Network => "network",
            PanelKind::Battery => "battery",
            PanelKind::Music => "music",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// Per-panel state: one simulator, one scheduler, nothing shared
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub kind: PanelKind,
    pub size: PanelSize,
    pub simulator: MotionSimulator,
    pub scheduler: AnimationScheduler,
    /// Pointer position relative to the panel's corner while dragging
    grab_offset: Option<Vector>,
}

impl Panel {
    pub fn new(id: PanelId, kind: PanelKind, config: MotionConfig, position: Point) -> Self {
        Self {
            id,
            kind,
            size: kind.default_size(),
            simulator: MotionSimulator::new(config, position),
            scheduler: AnimationScheduler::new(config.frame_interval_ms),
            grab_offset: None,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.simulator.position()
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.simulator.state()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state() == MotionState::Dragging
    }

    #[inline]
    pub fn is_coasting(&self) -> bool {
        self.state() == MotionState::Coasting
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Start a drag with the pointer at `pointer` (screen coordinates)
    pub fn grab(&mut self, pointer: Point, timestamp_ms: f64) -> MotionState {
        self.scheduler.stop();
        let previous = self.simulator.grab(timestamp_ms);
        self.grab_offset = Some(pointer - self.position());
        previous
    }

    /// Follow the pointer; returns the new panel position if a drag is active
    pub fn drag(&mut self, pointer: Point, timestamp_ms: f64) -> Option<Point> {
        let offset = self.grab_offset?;
        let target = pointer - offset;
        self.simulator
            .drag_to(target, timestamp_ms)
            .then_some(target)
    }

    /// End the drag; the caller decides what to do with the release
    pub(crate) fn take_grab(&mut self) -> Option<Vector> {
        self.grab_offset.take()
    }

    /// Debug-build consistency checks on the motion invariants
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, bounds: crate::motion::ScreenBounds, context: &str) {
        let velocity = self.simulator.velocity();
        match self.state() {
            MotionState::Idle => {
                debug_assert!(
                    velocity.is_zero(),
                    "[{}] panel {:?} idle with velocity {:?}",
                    context,
                    self.id,
                    velocity
                );
                debug_assert!(
                    !self.scheduler.is_running(),
                    "[{}] panel {:?} idle with scheduler running",
                    context,
                    self.id
                );
                debug_assert!(
                    bounds.contains(self.position()),
                    "[{}] panel {:?} idle outside bounds at {:?}",
                    context,
                    self.id,
                    self.position()
                );
            }
            MotionState::Dragging => {
                debug_assert!(
                    velocity.is_zero(),
                    "[{}] panel {:?} dragging with velocity {:?}",
                    context,
                    self.id,
                    velocity
                );
                debug_assert!(
                    !self.scheduler.is_running(),
                    "[{}] panel {:?} dragging with scheduler running",
                    context,
                    self.id
                );
            }
            MotionState::Coasting => {}
        }
    }
}
