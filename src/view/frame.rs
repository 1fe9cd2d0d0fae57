//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;

use crate::model::{GradientDirection, PixelRect};
use crate::theme::Color;

use super::bitmap::Bitmap;
use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
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

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Intersect a signed rectangle with the frame, returning `(x0, y0, x1, y1)`
    fn clip(&self, rect: PixelRect) -> Option<(usize, usize, usize, usize)> {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = (rect.right().max(0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0) as usize).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    /// Fill a rectangle, blending when the color is translucent
    pub fn fill_rect(&mut self, rect: PixelRect, color: u32) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = if alpha >= 1.0 {
                    color
                } else {
                    blend_colors(self.buffer[idx], color, alpha)
                };
            }
        }
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

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }

        let idx = y as usize * self.width + x as usize;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Draw a 1px line between two inclusive endpoints
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        if x0 == x1 || y0 == y1 {
            let rect = PixelRect::new(
                x0.min(x1),
                y0.min(y1),
                (x1 - x0).abs() + 1,
                (y1 - y0).abs() + 1,
            );
            return self.fill_rect(rect, color);
        }

        // Bresenham for the diagonal case
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.blend_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill a rectangle with a linear gradient from `start` to `end`
    pub fn fill_gradient(
        &mut self,
        rect: PixelRect,
        start: Color,
        end: Color,
        direction: GradientDirection,
    ) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let span = match direction {
            GradientDirection::Right | GradientDirection::Left => rect.width,
            GradientDirection::Down | GradientDirection::Up => rect.height,
        };
        let denom = (span - 1).max(1) as f32;

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let step = match direction {
                    GradientDirection::Right => x as i32 - rect.x,
                    GradientDirection::Left => rect.right() - 1 - x as i32,
                    GradientDirection::Down => y as i32 - rect.y,
                    GradientDirection::Up => rect.bottom() - 1 - y as i32,
                };
                let color = start.lerp(end, step as f32 / denom);
                self.buffer[row_start + x] = color.to_argb_u32() | 0xFF000000;
            }
        }
    }

    /// Copy a bitmap into the frame at `(x, y)`, honouring per-pixel alpha
    pub fn blit_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        if bitmap.is_empty() {
            return;
        }
        let dest = PixelRect::new(x, y, bitmap.width() as i32, bitmap.height() as i32);
        let Some((x0, y0, x1, y1)) = self.clip(dest) else {
            return;
        };

        for py in y0..y1 {
            let src_y = (py as i32 - y) as usize;
            let row_start = py * self.width;
            for px in x0..x1 {
                let src_x = (px as i32 - x) as usize;
                let argb = bitmap.pixel(src_x, src_y);
                let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
                if a >= 1.0 {
                    self.buffer[row_start + px] = argb;
                } else if a > 0.0 {
                    self.buffer[row_start + px] =
                        blend_colors(self.buffer[row_start + px], argb, a);
                }
            }
        }
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    /// Create a new text painter
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top-left corner at the specified position
    pub fn draw(&mut self, frame: &mut Frame, x: i32, y: i32, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x as i32 + bitmap_x as i32 + metrics.xmin;
                    let py = (glyph_top + bitmap_y as f32) as i32;
                    let argb = (color & 0x00FF_FFFF) | ((alpha as u32) << 24);
                    frame.blend_pixel(px, py, argb);
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }
}
