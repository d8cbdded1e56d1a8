//! Initial panel placement relative to the screen

use serde::{Deserialize, Serialize};

use crate::motion::{PanelSize, Point, ScreenRect};

/// Named starting spot for a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    CenterTop,
    CenterBottom,
    RightCenter,
    /// Absolute screen position of the top-left corner
    Custom { x: f64, y: f64 },
}

impl Anchor {
    /// Top-left corner for a panel of `size`, `spacing` px in from the edges
    ///
    /// The result is not clamped; callers pass it through the panel's
    /// bounds so oversized panels still land somewhere deterministic.
    pub fn resolve(&self, screen: ScreenRect, size: PanelSize, spacing: f64) -> Point {
        let left = screen.x + spacing;
        let top = screen.y + spacing;
        let right = screen.x + screen.width - size.width - spacing;
        let bottom = screen.y + screen.height - size.height - spacing;
        let center_x = screen.x + ((screen.width - size.width) / 2.0).floor();
        let center_y = screen.y + ((screen.height - size.height) / 2.0).floor();

        match *self {
            Anchor::TopRight => Point::new(right, top),
            Anchor::TopLeft => Point::new(left, top),
            Anchor::BottomRight => Point::new(right, bottom),
            Anchor::BottomLeft => Point::new(left, bottom),
            Anchor::CenterTop => Point::new(center_x, top),
            Anchor::CenterBottom => Point::new(center_x, bottom),
            Anchor::RightCenter => Point::new(right, center_y),
            Anchor::Custom { x, y } => Point::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenRect = ScreenRect::new(0.0, 0.0, 1920.0, 1080.0);
    const SIZE: PanelSize = PanelSize::new(300.0, 120.0);

    #[test]
    fn test_corner_anchors() {
        assert_eq!(
            Anchor::TopRight.resolve(SCREEN, SIZE, 20.0),
            Point::new(1600.0, 20.0)
        );
        assert_eq!(
            Anchor::TopLeft.resolve(SCREEN, SIZE, 20.0),
            Point::new(20.0, 20.0)
        );
        assert_eq!(
            Anchor::BottomRight.resolve(SCREEN, SIZE, 20.0),
            Point::new(1600.0, 940.0)
        );
        assert_eq!(
            Anchor::BottomLeft.resolve(SCREEN, SIZE, 20.0),
            Point::new(20.0, 940.0)
        );
    }

    #[test]
    fn test_centered_anchors_floor_like_integer_division() {
        let music = PanelSize::new(500.0, 100.0);
        let screen = ScreenRect::new(0.0, 0.0, 1921.0, 1081.0);
        assert_eq!(
            Anchor::CenterBottom.resolve(screen, music, 20.0),
            Point::new(710.0, 961.0)
        );
        assert_eq!(
            Anchor::RightCenter.resolve(screen, music, 20.0),
            Point::new(1401.0, 490.0)
        );
    }

    #[test]
    fn test_anchors_offset_by_screen_origin() {
        let screen = ScreenRect::new(1920.0, 100.0, 1280.0, 720.0);
        assert_eq!(
            Anchor::TopLeft.resolve(screen, SIZE, 10.0),
            Point::new(1930.0, 110.0)
        );
    }

    #[test]
    fn test_custom_anchor_is_absolute() {
        assert_eq!(
            Anchor::Custom { x: 5.0, y: 7.0 }.resolve(SCREEN, SIZE, 20.0),
            Point::new(5.0, 7.0)
        );
    }
}
