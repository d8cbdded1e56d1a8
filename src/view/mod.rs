//! Panel chrome painting
//!
//! Draws the frame every panel shares: a dark fill with a faint vertical
//! gradient, a 15px grid and a 1px border. Panel content is drawn on top
//! by whatever owns the panel and is not handled here.

pub mod frame;

pub use frame::{blend_colors, Frame};

use crate::theme::PanelTheme;

/// Spacing of the background grid in pixels
pub const GRID_SPACING: usize = 15;

/// Paint panel chrome into `frame`
pub fn paint_chrome(frame: &mut Frame, theme: &PanelTheme) {
    let width = frame.width();
    let height = frame.height();
    if width == 0 || height == 0 {
        return;
    }

    // Windows are opaque, so the translucent background is composed over black
    let background = blend_colors(
        0x000000,
        theme.background.to_rgb_u32(),
        theme.background.alpha(),
    );
    frame.clear(background);

    // Gradient overlay: faint white at the top fading to faint black at the bottom
    for y in 0..height {
        let t = y as f32 / height.max(1) as f32;
        let (color, alpha) = if t < 0.5 {
            (0xFFFFFF, (5.0 / 255.0) * (1.0 - 2.0 * t))
        } else {
            (0x000000, (10.0 / 255.0) * (2.0 * t - 1.0))
        };
        frame.hline(0, y, width, color, alpha);
    }

    let grid = theme.grid.to_rgb_u32();
    let grid_alpha = theme.grid.alpha();
    for y in (0..height).step_by(GRID_SPACING) {
        frame.hline(0, y, width, grid, grid_alpha);
    }
    for x in (0..width).step_by(GRID_SPACING) {
        frame.vline(x, 0, height, grid, grid_alpha);
    }

    frame.stroke_rect_px(
        1,
        1,
        width.saturating_sub(2),
        height.saturating_sub(2),
        theme.border.to_rgb_u32(),
        theme.border.alpha(),
    );
}
