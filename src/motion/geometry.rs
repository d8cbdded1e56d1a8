//! Screen-space geometry for panel positioning
//!
//! All coordinates are in physical screen pixels as `f64`. Positions are the
//! panel's top-left corner; the host rounds them when moving the window.

use std::ops::{Add, Mul, MulAssign, Sub};

use serde::{Deserialize, Serialize};

/// A point in screen coordinates (a panel's top-left corner)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to whole pixels for the windowing layer
    pub fn to_pixels(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// A 2D vector; used for velocities (px/s) and pointer offsets (px)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Fixed outer size of a panel in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl PanelSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Usable screen area as reported by the host display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The rectangle a panel's top-left corner may occupy
///
/// Derived from the screen rect minus the panel size. When the panel is
/// larger than the screen, `right < left` (or `bottom < top`); the range
/// accessors collapse such an axis onto `left`/`top` so clamping pins the
/// panel there instead of flipping between the two edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScreenBounds {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds for a panel of `size` on `screen`
    pub fn for_panel(screen: ScreenRect, size: PanelSize) -> Self {
        Self {
            left: screen.x,
            top: screen.y,
            right: screen.x + screen.width - size.width,
            bottom: screen.y + screen.height - size.height,
        }
    }

    /// True when the panel doesn't fit on at least one axis
    pub fn is_inverted(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// `(low, high)` on the x axis, with `high >= low`
    #[inline]
    pub fn horizontal(&self) -> (f64, f64) {
        (self.left, self.right.max(self.left))
    }

    /// `(low, high)` on the y axis, with `high >= low`
    #[inline]
    pub fn vertical(&self) -> (f64, f64) {
        (self.top, self.bottom.max(self.top))
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Point) -> bool {
        let (left, right) = self.horizontal();
        let (top, bottom) = self.vertical();
        point.x >= left && point.x <= right && point.y >= top && point.y <= bottom
    }

    /// Nearest point inside the bounds
    pub fn clamp(&self, point: Point) -> Point {
        let (left, right) = self.horizontal();
        let (top, bottom) = self.vertical();
        Point::new(point.x.clamp(left, right), point.y.clamp(top, bottom))
    }
}
