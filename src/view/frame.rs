//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in RGB format (0x00RRGGBB, alpha byte ignored).
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with `alpha` in 0.0..=1.0
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x >= self.width || y >= self.height || alpha <= 0.0 {
            return;
        }

        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Fill a rectangle with alpha blending (pixel coordinates)
    pub fn blend_rect_px(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        color: u32,
        alpha: f32,
    ) {
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);

        for py in y.min(self.height)..y1 {
            for px in x.min(self.width)..x1 {
                self.blend_pixel(px, py, color, alpha);
            }
        }
    }

    /// Horizontal 1px line
    pub fn hline(&mut self, x: usize, y: usize, w: usize, color: u32, alpha: f32) {
        self.blend_rect_px(x, y, w, 1, color, alpha);
    }

    /// Vertical 1px line
    pub fn vline(&mut self, x: usize, y: usize, h: usize, color: u32, alpha: f32) {
        self.blend_rect_px(x, y, 1, h, color, alpha);
    }

    /// Outline a rectangle with a 1px border
    pub fn stroke_rect_px(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        color: u32,
        alpha: f32,
    ) {
        if w == 0 || h == 0 {
            return;
        }
        self.hline(x, y, w, color, alpha);
        if h > 1 {
            self.hline(x, y + h - 1, w, color, alpha);
        }
        // Side edges skip the corners already covered by the horizontals
        if h > 2 {
            self.vline(x, y + 1, h - 2, color, alpha);
            if w > 1 {
                self.vline(x + w - 1, y + 1, h - 2, color, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend_colors(0x000000, 0xFFFFFF, 0.0), 0xFF000000);
        assert_eq!(blend_colors(0x000000, 0xFFFFFF, 1.0), 0xFFFFFFFF);
        assert_eq!(blend_colors(0x000000, 0xFF0000, 0.5), 0xFF7F0000);
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buffer = vec![0u32; 10 * 3];
        let frame = Frame::new(&mut buffer, 10, 5);
        assert_eq!(frame.height(), 3);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.blend_rect_px(2, 2, 10, 10, 0xFFFFFF, 1.0);
        frame.blend_pixel(7, 7, 0xFFFFFF, 1.0);
        assert_eq!(frame.get_pixel(3, 3), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(1, 1), 0);
    }

    #[test]
    fn test_stroke_leaves_interior_alone() {
        let mut buffer = vec![0u32; 5 * 5];
        let mut frame = Frame::new(&mut buffer, 5, 5);
        frame.stroke_rect_px(0, 0, 5, 5, 0x00FF00, 1.0);
        assert_eq!(frame.get_pixel(0, 0), 0xFF00FF00);
        assert_eq!(frame.get_pixel(4, 2), 0xFF00FF00);
        assert_eq!(frame.get_pixel(2, 4), 0xFF00FF00);
        assert_eq!(frame.get_pixel(2, 2), 0);
    }
}
