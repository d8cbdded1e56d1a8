//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag,
//! coast and settle transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=motion=trace` - every bounce and per-frame state diff
//! - `RUST_LOG=desktop_widgets::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/desktop-widgets/logs/widgets.log` with daily
//! rotation. File logging uses debug level by default for more verbose
//! troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Panel;
use crate::motion::{MotionState, Point, Vector};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to `~/.config/desktop-widgets/logs/widgets.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a panel's motion state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSnapshot {
    pub state: MotionState,
    pub position: Point,
    pub velocity: Vector,
    pub animating: bool,
}

impl MotionSnapshot {
    pub fn from_panel(panel: &Panel) -> Self {
        Self {
            state: panel.state(),
            position: panel.position(),
            velocity: panel.simulator.velocity(),
            animating: panel.scheduler.is_running(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &MotionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.position != other.position {
            changes.push(format!(
                "pos: ({:.1},{:.1}) → ({:.1},{:.1})",
                self.position.x, self.position.y, other.position.x, other.position.y
            ));
        }
        if self.velocity != other.velocity {
            changes.push(format!(
                "vel: ({:.2},{:.2}) → ({:.2},{:.2})",
                self.velocity.x, self.velocity.y, other.velocity.x, other.velocity.y
            ));
        }
        if self.animating != other.animating {
            let status = if other.animating { "started" } else { "stopped" };
            changes.push(format!("scheduler {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
