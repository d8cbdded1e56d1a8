//! Debug state dump for development diagnostics
//!
//! Serializes every panel's motion state to JSON. Triggered by F7 in debug
//! builds.

use serde::Serialize;
use std::path::PathBuf;

use desktop_widgets::config_paths;
use desktop_widgets::model::AppModel;
use desktop_widgets::motion::{MotionState, PanelSize, Point, ScreenBounds, ScreenRect, Vector};

#[derive(Serialize)]
pub struct StateDump {
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    /// Monotonic clock reading the model sees
    pub now_ms: f64,
    pub display: ScreenRect,
    pub display_generation: u64,
    pub panels: Vec<PanelDump>,
}

#[derive(Serialize)]
pub struct PanelDump {
    pub id: u64,
    pub kind: &'static str,
    pub state: MotionState,
    pub position: Point,
    pub velocity: Vector,
    /// Where the active drag started
    pub drag_origin: Option<Point>,
    pub size: PanelSize,
    pub bounds: ScreenBounds,
    pub next_deadline_ms: Option<f64>,
}

impl StateDump {
    pub fn from_model(model: &AppModel, now_ms: f64) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        let panels = model
            .panels
            .values()
            .filter_map(|panel| {
                Some(PanelDump {
                    id: panel.id.0,
                    kind: panel.kind.slug(),
                    state: panel.state(),
                    position: panel.position(),
                    velocity: panel.simulator.velocity(),
                    drag_origin: panel.simulator.drag_origin(),
                    size: panel.size,
                    bounds: model.bounds_for(panel.id)?,
                    next_deadline_ms: panel.scheduler.next_deadline_ms(),
                })
            })
            .collect();

        Self {
            timestamp,
            now_ms,
            display: model.display.rect(),
            display_generation: model.display.generation(),
            panels,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write the dump next to the log files
    pub fn save_to_file(&self) -> std::io::Result<PathBuf> {
        let dir = config_paths::ensure_logs_dir().map_err(std::io::Error::other)?;
        let path = dir.join(format!("state-dump-{}.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktop_widgets::config::WidgetsConfig;

    #[test]
    fn test_dump_lists_every_panel() {
        let model = AppModel::from_config(
            &WidgetsConfig::default(),
            ScreenRect::new(0.0, 0.0, 1920.0, 1080.0),
        );
        let dump = StateDump::from_model(&model, 12.5);
        assert_eq!(dump.panels.len(), 4);

        let json = dump.to_json();
        assert!(json.contains("\"system-monitor\""));
        assert!(json.contains("\"drag_origin\": null"));
        assert!(json.contains("\"now_ms\": 12.5"));
    }
}
