//! Where a panel is allowed to go

use super::geometry::{PanelSize, ScreenBounds, ScreenRect};

/// Source of the movable rectangle for a panel of a given size
///
/// Implementations must be cheap and non-blocking; the engine asks once per
/// coast tick.
pub trait BoundsProvider {
    fn current_bounds(&self, size: PanelSize) -> ScreenBounds;
}

impl BoundsProvider for ScreenRect {
    fn current_bounds(&self, size: PanelSize) -> ScreenBounds {
        ScreenBounds::for_panel(*self, size)
    }
}

/// The primary display as last reported by the host
///
/// `generation` increments on every change so callers holding derived
/// values can tell they are stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayGeometry {
    rect: ScreenRect,
    generation: u64,
}

impl DisplayGeometry {
    pub fn new(rect: ScreenRect) -> Self {
        Self {
            rect,
            generation: 0,
        }
    }

    #[inline]
    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a new display rect. Returns `true` if it differs from the old one.
    pub fn update(&mut self, rect: ScreenRect) -> bool {
        if rect == self.rect {
            return false;
        }
        tracing::info!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "display geometry changed"
        );
        self.rect = rect;
        self.generation += 1;
        true
    }
}

impl BoundsProvider for DisplayGeometry {
    fn current_bounds(&self, size: PanelSize) -> ScreenBounds {
        self.rect.current_bounds(size)
    }
}
