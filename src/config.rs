//! Widget configuration persistence
//!
//! Stores user preferences in `~/.config/desktop-widgets/config.yaml`:
//!
//! ```yaml
//! motion:
//!   damping: 0.95
//!   bounce_damping: 0.5
//!   min_velocity: 0.1
//!   edge_margin: 20.0
//!   frame_rate: 120.0
//! spacing: 20.0
//! panels:
//!   - kind: system-monitor
//!     anchor: top-right
//!   - kind: battery
//!     anchor: right-center
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Anchor, PanelKind};
use crate::motion::{MotionConfig, DEFAULT_FRAME_RATE};
use crate::theme::PanelTheme;

/// Physics tuning as written in the config file
///
/// `frame_rate` is in Hz; the engine works with the derived tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub damping: f64,
    pub bounce_damping: f64,
    pub min_velocity: f64,
    pub edge_margin: f64,
    pub frame_rate: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        let defaults = MotionConfig::default();
        Self {
            damping: defaults.damping,
            bounce_damping: defaults.bounce_damping,
            min_velocity: defaults.min_velocity,
            edge_margin: defaults.edge_margin,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl MotionSettings {
    /// Validate and convert to the engine's constants
    pub fn to_motion_config(&self) -> Result<MotionConfig, String> {
        if !(self.frame_rate > 0.0) {
            return Err(format!("frame_rate must be positive, got {}", self.frame_rate));
        }
        MotionConfig::new(
            self.damping,
            self.bounce_damping,
            self.min_velocity,
            self.edge_margin,
            1000.0 / self.frame_rate,
        )
    }
}

/// One panel to open at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub kind: PanelKind,
    pub anchor: Anchor,
}

impl PanelSpec {
    pub const fn new(kind: PanelKind, anchor: Anchor) -> Self {
        Self { kind, anchor }
    }
}

fn default_spacing() -> f64 {
    20.0
}

/// The layout the app opens with when nothing is configured
pub fn default_panels() -> Vec<PanelSpec> {
    vec![
        PanelSpec::new(PanelKind::SystemMonitor, Anchor::TopRight),
        PanelSpec::new(PanelKind::Network, Anchor::TopLeft),
        PanelSpec::new(PanelKind::Battery, Anchor::RightCenter),
        PanelSpec::new(PanelKind::Music, Anchor::CenterBottom),
    ]
}

/// Widget configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub motion: MotionSettings,

    /// Gap between anchored panels and the screen edges (px)
    #[serde(default = "default_spacing")]
    pub spacing: f64,

    #[serde(default = "default_panels")]
    pub panels: Vec<PanelSpec>,

    #[serde(default)]
    pub theme: PanelTheme,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            motion: MotionSettings::default(),
            spacing: default_spacing(),
            panels: default_panels(),
            theme: PanelTheme::default(),
        }
    }
}

impl WidgetsConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let dir = crate::config_paths::ensure_config_dir()?;
        self.save_to(&dir.join("config.yaml"))
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_yaml()?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Physics constants, or the defaults if the configured ones are invalid
    pub fn motion_config(&self) -> MotionConfig {
        match self.motion.to_motion_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid motion settings ({}), using defaults", e);
                MotionConfig::default()
            }
        }
    }
}
