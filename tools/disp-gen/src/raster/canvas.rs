//! Filled-shape drawing on an RGBA canvas
//!
//! All bounds are inclusive pixel coordinates and may fall partly outside the
//! canvas. Fills overwrite pixels (no alpha compositing).

use image::{Rgba, RgbaImage};

use super::glyphs::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Transparent square canvas
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::new(size, size),
        }
    }

    /// Square canvas filled with `color`
    pub fn filled(size: u32, color: [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba(color)),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Visit every canvas pixel inside the clamped inclusive box
    fn fill_where(
        &mut self,
        (x0, y0): (i32, i32),
        (x1, y1): (i32, i32),
        color: [u8; 4],
        inside: impl Fn(i32, i32) -> bool,
    ) {
        let max = self.size() as i32 - 1;
        let (x0, x1) = (x0.max(0), x1.min(max));
        let (y0, y1) = (y0.max(0), y1.min(max));
        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(x, y) {
                    self.image.put_pixel(x as u32, y as u32, Rgba(color));
                }
            }
        }
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 4]) {
        self.fill_where((x0, y0), (x1, y1), color, |_, _| true);
    }

    /// Rectangle with quarter-circle corners of `radius`
    pub fn fill_rounded_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: i32,
        color: [u8; 4],
    ) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let r = radius.clamp(0, (x1 - x0).min(y1 - y0) / 2);
        let (left, right) = (x0 + r, x1 - r);
        let (top, bottom) = (y0 + r, y1 - r);

        self.fill_where((x0, y0), (x1, y1), color, |x, y| {
            let cx = if x < left {
                left
            } else if x > right {
                right
            } else {
                return true;
            };
            let cy = if y < top {
                top
            } else if y > bottom {
                bottom
            } else {
                return true;
            };
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r * r
        });
    }

    /// Even-odd polygon fill sampled at pixel centers
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: [u8; 4]) {
        if points.len() < 3 {
            return;
        }
        let min_x = points.iter().map(|p| p.0).fold(f32::MAX, f32::min).floor() as i32;
        let max_x = points.iter().map(|p| p.0).fold(f32::MIN, f32::max).ceil() as i32;
        let min_y = points.iter().map(|p| p.1).fold(f32::MAX, f32::min).floor() as i32;
        let max_y = points.iter().map(|p| p.1).fold(f32::MIN, f32::max).ceil() as i32;

        self.fill_where((min_x, min_y), (max_x, max_y), color, |x, y| {
            polygon_contains(points, x as f32 + 0.5, y as f32 + 0.5)
        });
    }

    /// Pixel extent of `text` at `scale`
    pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
        let count = text.chars().count() as u32;
        if count == 0 {
            return (0, 0);
        }
        ((count * ADVANCE - 1) * scale, GLYPH_HEIGHT * scale)
    }

    /// Draw `text` with its top-left corner at (x, y), each glyph cell `scale` pixels
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: [u8; 4]) {
        let s = scale as i32;
        for (i, c) in text.chars().enumerate() {
            let rows = glyphs::glyph(c);
            let gx = x + (i as u32 * ADVANCE) as i32 * s;
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if glyphs::is_set(rows, col, row) {
                        let px = gx + col as i32 * s;
                        let py = y + row as i32 * s;
                        self.fill_rect(px, py, px + s - 1, py + s - 1, color);
                    }
                }
            }
        }
    }

    /// Draw `text` centered on the canvas
    pub fn draw_text_centered(&mut self, text: &str, scale: u32, color: [u8; 4]) {
        let (w, h) = Self::text_size(text, scale);
        let size = self.size() as i32;
        let x = (size - w as i32) / 2;
        let y = (size - h as i32) / 2;
        self.draw_text(text, x, y, scale, color);
    }
}

fn polygon_contains(points: &[(f32, f32)], px: f32, py: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
