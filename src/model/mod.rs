//! Application state
//!
//! `AppModel` owns every panel plus the display geometry they are bounded
//! by. Panels share nothing with each other; host events are routed to the
//! right one by `PanelId`.

pub mod layout;
pub mod panel;

pub use layout::Anchor;
pub use panel::{Panel, PanelId, PanelKind};

use std::collections::BTreeMap;

use crate::config::{PanelSpec, WidgetsConfig};
use crate::motion::{
    BoundsProvider, DisplayGeometry, MotionConfig, ScreenBounds, ScreenRect,
};
use crate::theme::PanelTheme;

#[derive(Debug, Clone)]
pub struct AppModel {
    pub display: DisplayGeometry,
    pub panels: BTreeMap<PanelId, Panel>,
    pub motion: MotionConfig,
    pub spacing: f64,
    pub theme: PanelTheme,
    next_panel_id: u64,
}

impl AppModel {
    pub fn new(display: ScreenRect, motion: MotionConfig, spacing: f64) -> Self {
        Self {
            display: DisplayGeometry::new(display),
            panels: BTreeMap::new(),
            motion,
            spacing,
            theme: PanelTheme::default(),
            next_panel_id: 1,
        }
    }

    /// Build a model and open every panel listed in `config`
    pub fn from_config(config: &WidgetsConfig, display: ScreenRect) -> Self {
        let mut model = Self::new(display, config.motion_config(), config.spacing);
        model.theme = config.theme;
        for spec in &config.panels {
            model.add_panel(*spec);
        }
        model
    }

    /// Open a panel at its anchor, clamped onto the screen
    pub fn add_panel(&mut self, spec: PanelSpec) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;

        let size = spec.kind.default_size();
        let wanted = spec.anchor.resolve(self.display.rect(), size, self.spacing);
        let position = self.display.current_bounds(size).clamp(wanted);

        tracing::info!(
            panel = id.0,
            kind = spec.kind.slug(),
            x = position.x,
            y = position.y,
            "panel opened"
        );

        self.panels
            .insert(id, Panel::new(id, spec.kind, self.motion, position));
        id
    }

    pub fn remove_panel(&mut self, id: PanelId) -> Option<Panel> {
        self.panels.remove(&id)
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    /// Bounds for `id` against the current display
    pub fn bounds_for(&self, id: PanelId) -> Option<ScreenBounds> {
        self.panels
            .get(&id)
            .map(|panel| self.display.current_bounds(panel.size))
    }

    /// True while any panel is coasting
    pub fn is_animating(&self) -> bool {
        self.panels.values().any(|p| p.scheduler.is_running())
    }

    /// Earliest pending tick across all panels (monotonic ms)
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.panels
            .values()
            .filter_map(|p| p.scheduler.next_deadline_ms())
            .min_by(|a, b| a.total_cmp(b))
    }
}
